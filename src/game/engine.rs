use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{
    action::Direction,
    config::GameConfig,
    state::{CollisionType, GameState, Position, Snake},
};

/// Information about a step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// The snake covers every cell and no food could be placed
    pub board_full: bool,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle() -> Self {
        Self {
            terminated: true,
            info: StepInfo::default(),
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game: a centered snake heading right, new food, score 0
    pub fn restart(&mut self) -> GameState {
        let center_x = (self.config.grid_width / 2) as i32;
        let center_y = (self.config.grid_height / 2) as i32;

        let snake = Snake::new(
            Position::new(center_x, center_y),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let mut state = GameState::new(
            snake,
            None,
            self.config.grid_width,
            self.config.grid_height,
            self.config.initial_speed_ms,
        );
        self.spawn_food(&mut state);

        tracing::debug!(
            width = state.grid_width,
            height = state.grid_height,
            food = ?state.food,
            "game started"
        );

        state
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if !state.is_running {
            return StepResult::idle();
        }

        state.snake.direction = state.pending_direction;
        let new_head = state.snake.head().moved_in_direction(state.snake.direction);

        if let Some(collision_type) = self.check_collision(state, new_head) {
            state.is_running = false;
            state.steps += 1;

            tracing::info!(
                reason = ?collision_type,
                score = state.score,
                length = state.snake.len(),
                steps = state.steps,
                "game over"
            );

            return StepResult {
                terminated: true,
                info: StepInfo {
                    collision_type: Some(collision_type),
                    ..Default::default()
                },
            };
        }

        let ate_food = state.food == Some(new_head);
        state.snake.advance(new_head, ate_food);

        let mut board_full = false;
        if ate_food {
            state.score += self.config.score_per_food;
            self.spawn_food(state);
            state.speed_ms = self.next_speed(state.speed_ms);
            board_full = state.food.is_none();

            tracing::debug!(
                score = state.score,
                length = state.snake.len(),
                speed_ms = state.speed_ms,
                "food eaten"
            );
            if board_full {
                tracing::info!(score = state.score, "board full, no room for food");
            }
        }

        state.steps += 1;

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food,
                collision_type: None,
                board_full,
            },
        }
    }

    /// Place food on a uniformly chosen free cell, or clear it if none is left
    pub fn spawn_food(&mut self, state: &mut GameState) {
        let free = state.free_cells();
        state.food = free.choose(&mut self.rng).copied();
    }

    /// Check if the new head position causes a collision.
    ///
    /// The whole pre-move body counts, tail included, even though the tail
    /// would vacate its cell on this tick.
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.is_occupied_by_snake(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn next_speed(&self, speed_ms: u64) -> u64 {
        let decayed = (speed_ms as f64 * self.config.speed_decay).floor() as u64;
        decayed.max(self.config.min_speed_ms)
    }
}
