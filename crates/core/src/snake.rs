//! The snake: a bounded body plus a heading.

use arrayvec::ArrayVec;

use crate::types::{
    Direction, Position, GAME_HEIGHT, GAME_WIDTH, INITIAL_SNAKE_LENGTH, MAX_SNAKE_LENGTH,
};

/// Snake body and heading.
///
/// The head is `body[0]` and segments are ordered head to tail. All cells
/// are distinct, and the body never shrinks during a round.
#[derive(Debug, Clone)]
pub struct Snake {
    body: ArrayVec<Position, MAX_SNAKE_LENGTH>,
    direction: Direction,
}

impl Snake {
    /// Spawn centered in the playfield, heading right, tail trailing left.
    pub fn new() -> Self {
        let cx = GAME_WIDTH / 2;
        let cy = GAME_HEIGHT / 2;
        let mut body = ArrayVec::new();
        for i in 0..INITIAL_SNAKE_LENGTH as i16 {
            body.push(Position::new(cx - i, cy));
        }
        Self {
            body,
            direction: Direction::Right,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether any body cell sits on `pos`, tail included.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Record a new heading.
    ///
    /// A turn straight back onto the neck is rejected: it would be an
    /// instant, unavoidable collision. Returns whether the turn was taken.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advance one cell: the head moves to `new_head` and every other
    /// segment takes its predecessor's place.
    ///
    /// With `grow` the vacated tail cell stays part of the body and the
    /// snake lengthens by one; at capacity the snake moves without growing.
    /// The caller has already ruled out a collision at `new_head`.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        if !grow || self.body.is_full() {
            self.body.pop();
        }
        self.body.insert(0, new_head);
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
