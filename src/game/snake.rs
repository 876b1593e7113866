use std::collections::VecDeque;

use super::grid::Position;
use super::heading::Heading;

/// Fixed rendering color assigned to a snake at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeColor {
    /// First human player
    White,
    /// Second human player
    Grey,
    Gold,
    Goldenrod,
    Khaki,
}

/// Who steers the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeRole {
    Player,
    Ai,
}

/// A single snake in the play area
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments with the head at the front. An empty body means the
    /// snake is dead and permanently out of the game.
    pub body: VecDeque<Position>,
    /// Current heading of movement
    pub heading: Heading,
    pub color: SnakeColor,
    pub role: SnakeRole,
}

impl Snake {
    /// Create a newborn snake: `length` segments stacked vertically from
    /// the head, one row of `row_step` apart. All snakes start out
    /// heading east.
    pub fn new(
        head: Position,
        length: usize,
        row_step: i32,
        color: SnakeColor,
        role: SnakeRole,
    ) -> Self {
        let mut body = VecDeque::with_capacity(length);
        for i in 0..length {
            body.push_back(head.moved_by(0, row_step * i as i32));
        }

        Self {
            body,
            heading: Heading::East,
            color,
            role,
        }
    }

    /// Get the head position, if the snake is still alive
    pub fn head(&self) -> Option<Position> {
        self.body.front().copied()
    }

    /// A snake with no segments left is dead
    pub fn is_alive(&self) -> bool {
        !self.body.is_empty()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
