//! Grid cursor over the card layout.

use crate::types::{CardId, GRID_COLUMNS, GRID_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Cursor position on the card grid. Movement wraps at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    col: u8,
    row: u8,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Card id under the cursor (row-major).
    pub fn card(&self) -> CardId {
        self.row as usize * GRID_COLUMNS as usize + self.col as usize
    }

    pub fn step(&mut self, dir: Direction) {
        match dir {
            Direction::Left => self.col = (self.col + GRID_COLUMNS - 1) % GRID_COLUMNS,
            Direction::Right => self.col = (self.col + 1) % GRID_COLUMNS,
            Direction::Up => self.row = (self.row + GRID_ROWS - 1) % GRID_ROWS,
            Direction::Down => self.row = (self.row + 1) % GRID_ROWS,
        }
    }
}
