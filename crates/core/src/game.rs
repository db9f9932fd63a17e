//! Game state module - the simulation and its state machine
//!
//! One [`Game`] instance exists per process. It is owned by the runtime and
//! handed by mutable reference into whichever event handler runs; nothing
//! else holds a reference to it.

use arrayvec::ArrayVec;

use crate::rng::{Lcg, BOOT_SEED};
use crate::snake::Snake;
use crate::types::{
    Direction, Mode, Position, COMMAND_BUFFER_CAP, FOOD_SCORE, GAME_HEIGHT, GAME_WIDTH,
    MAX_SNAKE_LENGTH, SPEED_DIVISOR, START_COMMAND,
};

/// Outcome of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The snake moved into a free cell.
    Moved,
    /// The snake moved onto the food and ate it.
    Ate,
    /// The snake hit the border or itself; the game is over.
    Crashed,
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Game {
    snake: Snake,
    food: Position,
    score: u32,
    mode: Mode,
    /// Command characters typed in the menu; extra input is dropped.
    command: ArrayVec<char, COMMAND_BUFFER_CAP>,
    /// Sub-samples the timer rate down to the game speed.
    tick_counter: u32,
    /// Seeded at boot, never reseeded; restarts continue the sequence.
    rng: Lcg,
}

impl Game {
    /// Construct the boot state: menu shown, nothing running.
    pub fn new() -> Self {
        Self::with_seed(BOOT_SEED)
    }

    /// Construct with an explicit RNG seed.
    pub fn with_seed(seed: u32) -> Self {
        let mut game = Self {
            snake: Snake::new(),
            food: Position::new(0, 0),
            score: 0,
            mode: Mode::Menu,
            command: ArrayVec::new(),
            tick_counter: 0,
            rng: Lcg::new(seed),
        };
        game.spawn_food();
        game
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    pub fn command(&self) -> &[char] {
        &self.command
    }

    /// Current RNG state, for inspection.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    /// Begin a new round: fresh snake, food, score and tick counter.
    ///
    /// The RNG is deliberately left alone so the food sequence continues
    /// from wherever the previous round ended.
    pub fn restart(&mut self) {
        self.snake = Snake::new();
        self.score = 0;
        self.tick_counter = 0;
        self.mode = Mode::Playing;
        self.spawn_food();
    }

    /// Dismiss the game-over screen back to the menu.
    pub fn to_menu(&mut self) {
        self.mode = Mode::Menu;
        self.command.clear();
    }

    /// Record a new intended heading for the snake.
    ///
    /// Reversals are rejected; this is the only input-time validity rule.
    pub fn turn(&mut self, direction: Direction) -> bool {
        self.snake.turn(direction)
    }

    /// Append one typed character to the command buffer.
    ///
    /// Characters beyond the buffer capacity are silently dropped. Returns
    /// whether the character was stored.
    pub fn push_command(&mut self, ch: char) -> bool {
        self.command.try_push(ch).is_ok()
    }

    /// Whether the buffer holds the start command: at least five characters
    /// with the first five spelling `"start"` exactly, case-sensitive.
    pub fn command_matches_start(&self) -> bool {
        self.command.len() >= START_COMMAND.len()
            && self
                .command
                .iter()
                .zip(START_COMMAND.chars())
                .all(|(&typed, wanted)| typed == wanted)
    }

    pub fn clear_command(&mut self) {
        self.command.clear();
    }

    /// Count one timer tick.
    ///
    /// Returns `true` when the speed divisor is reached and a simulation
    /// step is due; the counter then rolls back to zero. Ticks below the
    /// divisor change nothing but the counter.
    pub fn on_tick(&mut self) -> bool {
        self.tick_counter += 1;
        if self.tick_counter < SPEED_DIVISOR {
            return false;
        }
        self.tick_counter = 0;
        true
    }

    /// Advance the simulation by one step. Only meaningful while playing.
    ///
    /// The collision test runs before any mutation: the tail cell still
    /// counts as occupied even though it is about to be vacated. On a crash
    /// the body and score are untouched and the mode becomes `GameOver`.
    pub fn step(&mut self) -> StepResult {
        let new_head = self.snake.head().offset(self.snake.direction());

        if self.collides(new_head) {
            self.mode = Mode::GameOver;
            return StepResult::Crashed;
        }

        let ate = new_head == self.food;
        let can_grow = self.snake.len() < MAX_SNAKE_LENGTH;
        self.snake.advance(new_head, ate && can_grow);

        if !ate {
            return StepResult::Moved;
        }
        if can_grow {
            self.score += FOOD_SCORE;
        }
        self.spawn_food();
        StepResult::Ate
    }

    /// A cell collides if it lies on or beyond the border, or on the snake.
    fn collides(&self, pos: Position) -> bool {
        pos.x <= 0
            || pos.x >= GAME_WIDTH + 1
            || pos.y <= 0
            || pos.y >= GAME_HEIGHT + 1
            || self.snake.occupies(pos)
    }

    /// Place the food on a free interior cell.
    ///
    /// Rejection sampling: interior cells (78 * 22) vastly outnumber
    /// `MAX_SNAKE_LENGTH`, so this terminates.
    fn spawn_food(&mut self) {
        loop {
            let x = self.rng.next_range(GAME_WIDTH as u32) as i16 + 1;
            let y = self.rng.next_range(GAME_HEIGHT as u32) as i16 + 1;
            let candidate = Position::new(x, y);
            if !self.snake.occupies(candidate) {
                self.food = candidate;
                return;
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
