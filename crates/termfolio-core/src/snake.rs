//! Snake game rules.
//!
//! The game is a plain state machine: the display feeds it key presses and
//! clock ticks and renders [`SnakeGame::board`]. Randomness comes in as a seed
//! on each tick so the rules stay deterministic under test.

use crate::config::snake::{
    BOARD_HEIGHT, BOARD_WIDTH, CELL_BODY, CELL_EMPTY, CELL_FOOD, CELL_HEAD, INITIAL_FOOD,
    INITIAL_HEAD, SCORE_PER_FOOD,
};
use crate::output::Line;

/// A board cell. Coordinates are signed so a step past the edge is representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }

    pub fn is_out_of_bounds(self) -> bool {
        self.x < 0 || self.x >= BOARD_WIDTH || self.y < 0 || self.y >= BOARD_HEIGHT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Maps an arrow key or WASD (any case) to a direction.
    ///
    /// Returns `None` for other keys and for a reversal of `current`.
    pub fn from_key(key: &str, current: Direction) -> Option<Self> {
        let wanted = match key.to_lowercase().as_str() {
            "arrowup" | "w" => Self::Up,
            "arrowdown" | "s" => Self::Down,
            "arrowleft" | "a" => Self::Left,
            "arrowright" | "d" => Self::Right,
            _ => return None,
        };
        (wanted != current.opposite()).then_some(wanted)
    }
}

/// Picks a free cell for the next food item.
///
/// Free cells are taken in row-major order and `seed` selects one of them, so
/// the result never lands on `snake`. `None` means the snake fills the board.
pub fn place_food(snake: &[Position], seed: u64) -> Option<Position> {
    let free: Vec<Position> = (0..BOARD_HEIGHT)
        .flat_map(|y| (0..BOARD_WIDTH).map(move |x| Position::new(x, y)))
        .filter(|cell| !snake.contains(cell))
        .collect();
    if free.is_empty() {
        return None;
    }
    let index = (seed % free.len() as u64) as usize;
    Some(free[index])
}

/// A `BOARD_HEIGHT` x `BOARD_WIDTH` grid of empty cells.
pub fn empty_board() -> Vec<Vec<&'static str>> {
    vec![vec![CELL_EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the first start key.
    Ready,
    Playing,
    GameOver,
}

/// What a key press did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyResponse {
    /// The key was consumed by the game.
    Handled,
    /// The player asked to leave the game.
    Quit,
    Ignored,
}

/// One round of Snake, from the start screen through game over and restarts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGame {
    /// Head first.
    snake: Vec<Position>,
    food: Position,
    direction: Direction,
    score: u32,
    best: u32,
    status: GameStatus,
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeGame {
    pub fn new() -> Self {
        let (hx, hy) = INITIAL_HEAD;
        let (fx, fy) = INITIAL_FOOD;
        Self {
            snake: vec![Position::new(hx, hy)],
            food: Position::new(fx, fy),
            direction: Direction::Right,
            score: 0,
            best: 0,
            status: GameStatus::Ready,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Highest score reached since the game was opened.
    pub fn best_score(&self) -> u32 {
        self.best
    }

    pub fn snake(&self) -> &[Position] {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Feeds one key press to the game.
    ///
    /// Escape quits in any state. Space or Enter starts a new round from the
    /// start or game over screen. While playing, arrows and WASD steer.
    pub fn handle_key(&mut self, key: &str) -> KeyResponse {
        if key == "Escape" {
            return KeyResponse::Quit;
        }

        match self.status {
            GameStatus::Ready | GameStatus::GameOver => {
                if key == " " || key == "Enter" {
                    self.restart();
                    KeyResponse::Handled
                } else {
                    KeyResponse::Ignored
                }
            }
            GameStatus::Playing => match Direction::from_key(key, self.direction) {
                Some(direction) => {
                    self.direction = direction;
                    KeyResponse::Handled
                }
                None => KeyResponse::Ignored,
            },
        }
    }

    fn restart(&mut self) {
        let best = self.best;
        *self = Self::new();
        self.best = best;
        self.status = GameStatus::Playing;
    }

    /// Advances the snake one cell. `seed` places the next food if this move
    /// eats the current one.
    ///
    /// Does nothing unless a round is in progress.
    pub fn tick(&mut self, seed: u64) {
        if self.status != GameStatus::Playing {
            return;
        }

        let Some(&head) = self.snake.first() else {
            self.status = GameStatus::GameOver;
            return;
        };
        let next = head.step(self.direction);
        if next.is_out_of_bounds() || self.snake.contains(&next) {
            self.status = GameStatus::GameOver;
            return;
        }

        self.snake.insert(0, next);
        if next == self.food {
            self.score += SCORE_PER_FOOD;
            self.best = self.best.max(self.score);
            match place_food(&self.snake, seed) {
                Some(food) => self.food = food,
                // nowhere left to grow
                None => self.status = GameStatus::GameOver,
            }
        } else {
            self.snake.pop();
        }
    }

    /// The grid to draw, food first and then the snake over it.
    pub fn board(&self) -> Vec<Vec<&'static str>> {
        let mut board = empty_board();
        let mut put = |cell: Position, glyph: &'static str| {
            if !cell.is_out_of_bounds() {
                board[cell.y as usize][cell.x as usize] = glyph;
            }
        };
        put(self.food, CELL_FOOD);
        for (index, segment) in self.snake.iter().enumerate() {
            put(*segment, if index == 0 { CELL_HEAD } else { CELL_BODY });
        }
        board
    }

    /// Lines shown under the board for the current state.
    pub fn status_lines(&self) -> Vec<Line> {
        match self.status {
            GameStatus::Ready => vec![
                Line::info("Press SPACE or ENTER to start"),
                Line::text("Press ESC to leave"),
            ],
            GameStatus::Playing => vec![
                Line::text("Controls: Arrow Keys or WASD"),
                Line::text(format!("Eat apples {CELL_FOOD} to grow and score points!")),
            ],
            GameStatus::GameOver => vec![
                Line::error("GAME OVER!"),
                Line::info(format!("Final Score: {}", self.score)),
                Line::text("Press SPACE or ENTER to restart"),
                Line::text("Press ESC to leave"),
            ],
        }
    }

    /// What stays in the log after the player leaves.
    pub fn summary_lines(&self) -> Vec<Line> {
        vec![
            Line::heading("🐍 SNAKE GAME 🐍"),
            Line::field("Best score", self.best.to_string()),
        ]
    }
}
