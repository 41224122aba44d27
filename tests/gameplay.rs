use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tui_snake::game::{
    CollisionType, Direction, GameConfig, GameEngine, GameState, Position, Snake,
};

const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn engine(seed: u64) -> GameEngine {
    GameEngine::new(GameConfig::default().with_seed(seed))
}

fn state_with(cells: &[(i32, i32)], direction: Direction, food: Option<(i32, i32)>) -> GameState {
    let snake = Snake::from_cells(cells.iter().map(|&(x, y)| Position::new(x, y)), direction);
    GameState::new(snake, food.map(|(x, y)| Position::new(x, y)), 30, 20, 120)
}

fn cells(state: &GameState) -> Vec<(i32, i32)> {
    state.snake.cells().map(|p| (p.x, p.y)).collect()
}

#[test]
fn three_ticks_translate_the_snake() {
    let mut engine = engine(1);
    let mut state = state_with(
        &[(16, 10), (15, 10), (14, 10)],
        Direction::Right,
        Some((0, 0)),
    );

    for _ in 0..3 {
        let result = engine.step(&mut state);
        assert!(!result.terminated);
    }

    assert_eq!(cells(&state), vec![(19, 10), (18, 10), (17, 10)]);
    assert_eq!(state.score, 0);
    assert!(state.is_running);
}

#[test]
fn eating_food_ahead_grows_and_scores() {
    let mut engine = engine(2);
    let mut state = state_with(
        &[(16, 10), (15, 10), (14, 10)],
        Direction::Right,
        Some((17, 10)),
    );

    let result = engine.step(&mut state);

    assert!(result.info.ate_food);
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(cells(&state)[3], (14, 10));
    let food = state.food.expect("free cells remain");
    assert!(!state.is_occupied_by_snake(food));
    assert!(state.speed_ms < 120);
}

#[test]
fn wall_hit_ends_the_game_and_freezes_state() {
    let mut engine = engine(3);
    let mut state = state_with(&[(0, 5), (1, 5), (2, 5)], Direction::Left, Some((10, 10)));

    let result = engine.step(&mut state);
    assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
    assert!(!state.is_running);

    let frozen = state.clone();
    for direction in ALL_DIRECTIONS {
        state.handle_direction_input(direction);
        engine.step(&mut state);
    }
    assert_eq!(cells(&state), cells(&frozen));
    assert_eq!(state.score, frozen.score);
    assert!(!state.is_running);
}

#[test]
fn every_wall_is_fatal() {
    let cases = [
        ((0, 7), Direction::Left),
        ((29, 7), Direction::Right),
        ((12, 0), Direction::Up),
        ((12, 19), Direction::Down),
    ];

    for ((x, y), direction) in cases {
        let mut engine = engine(4);
        let snake = Snake::new(Position::new(x, y), direction, 1);
        let mut state = GameState::new(snake, None, 30, 20, 120);

        let result = engine.step(&mut state);

        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
        assert!(!state.is_running);
        assert_eq!(state.snake.head(), Position::new(x, y));
    }
}

#[test]
fn reversing_is_always_rejected() {
    for direction in ALL_DIRECTIONS {
        let mut engine = engine(5);
        let snake = Snake::new(Position::new(15, 10), direction, 3);
        let mut state = GameState::new(snake, Some(Position::new(0, 0)), 30, 20, 120);

        state.handle_direction_input(direction.opposite());
        engine.step(&mut state);

        assert!(state.is_running);
        assert_eq!(state.direction(), direction);
        assert_eq!(
            state.snake.head(),
            Position::new(15, 10).moved_in_direction(direction)
        );
    }
}

#[test]
fn restart_after_game_over_restores_initial_game() {
    let mut engine = engine(6);
    let mut state = engine.restart();
    state.food = None;
    state.handle_direction_input(Direction::Up);
    while state.is_running {
        engine.step(&mut state);
    }

    let state = engine.restart();

    assert!(state.is_running);
    assert_eq!(state.score, 0);
    assert_eq!(state.speed_ms, 120);
    assert_eq!(state.direction(), Direction::Right);
    assert_eq!(cells(&state), vec![(15, 10), (14, 10), (13, 10)]);
}

/// Random play on a small board, checking the invariants after every tick
#[test]
fn invariants_hold_under_random_play() {
    let config = GameConfig::new(8, 6).with_seed(11);
    let mut engine = GameEngine::new(config.clone());
    let mut inputs = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let mut state = engine.restart();
        let mut last_speed = state.speed_ms;

        for _ in 0..500 {
            if let Some(&direction) = ALL_DIRECTIONS.choose(&mut inputs) {
                state.handle_direction_input(direction);
            }

            let score_before = state.score;
            let length_before = state.snake.len();
            let result = engine.step(&mut state);

            if !state.is_running {
                break;
            }

            let unique: HashSet<_> = state.snake.cells().collect();
            assert_eq!(unique.len(), state.snake.len(), "snake overlaps itself");

            let body: Vec<_> = state.snake.cells().collect();
            for pair in body.windows(2) {
                let distance = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
                assert_eq!(distance, 1);
            }

            if let Some(food) = state.food {
                assert!(!state.is_occupied_by_snake(food));
            }

            if result.info.ate_food {
                assert_eq!(state.score, score_before + 10);
                assert_eq!(state.snake.len(), length_before + 1);
            } else {
                assert_eq!(state.score, score_before);
                assert_eq!(state.snake.len(), length_before);
            }

            assert!(state.speed_ms <= last_speed);
            assert!(state.speed_ms >= config.min_speed_ms);
            last_speed = state.speed_ms;
        }
    }
}
