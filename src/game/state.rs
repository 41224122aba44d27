use std::collections::VecDeque;
use std::time::Duration;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    pub body: VecDeque<Position>,
    /// Direction applied on the last tick
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self { body, direction }
    }

    /// Build a snake from explicit cells, head first
    pub fn from_cells(cells: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        Self {
            body: cells.into_iter().collect(),
            direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Whether `pos` is any cell of the snake, head and tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head; the tail is dropped unless the snake grows
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);

        if !grow {
            self.body.pop_back();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` only when the snake covers the whole grid
    pub food: Option<Position>,
    /// Turn requested by input, applied at the start of the next tick
    pub pending_direction: Direction,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    /// Current tick interval in milliseconds
    pub speed_ms: u64,
    pub steps: u32,
    pub is_running: bool,
}

impl GameState {
    /// Create a new running game state
    pub fn new(
        snake: Snake,
        food: Option<Position>,
        grid_width: usize,
        grid_height: usize,
        speed_ms: u64,
    ) -> Self {
        let pending_direction = snake.direction;
        Self {
            snake,
            food,
            pending_direction,
            grid_width,
            grid_height,
            score: 0,
            speed_ms,
            steps: 0,
            is_running: true,
        }
    }

    /// Direction the snake moved on the last tick
    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Record an intended turn for the next tick.
    ///
    /// Reversals are checked against the direction already applied, not the
    /// pending one, so the snake can never fold back onto its neck within a
    /// single tick. Input after game over is dropped. Returns whether the
    /// request was accepted.
    pub fn handle_direction_input(&mut self, requested: Direction) -> bool {
        if !self.is_running || self.snake.direction.is_opposite(requested) {
            return false;
        }
        self.pending_direction = requested;
        true
    }

    /// Delay before the next tick should fire
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    /// All grid cells not covered by the snake, row by row
    pub fn free_cells(&self) -> Vec<Position> {
        let mut occupied = vec![false; self.grid_width * self.grid_height];
        for pos in self.snake.cells().filter(|p| self.is_in_bounds(*p)) {
            occupied[pos.y as usize * self.grid_width + pos.x as usize] = true;
        }

        (0..self.grid_height)
            .flat_map(|y| (0..self.grid_width).map(move |x| (x, y)))
            .filter(|&(x, y)| !occupied[y * self.grid_width + x])
            .map(|(x, y)| Position::new(x as i32, y as i32))
            .collect()
    }
}
