//! # Grid Model
//!
//! Value types for the 9×9 grid: where a cell is ([`Coordinate`]), what it
//! can hold ([`Digit`], [`Cell`]) and which way the cursor can go
//! ([`Direction`]).
//!
//! ```text
//!   col 0 1 2   3 4 5   6 7 8
//! row 0 . . .   . . .   . . .
//!     1 . . .   . . .   . . .     box (0,0) | box (0,1) | box (0,2)
//!     2 . . .   . . .   . . .
//!
//!     3 . . .   . . .   . . .
//!     ...
//! ```
//!
//! Boxes are cosmetic. Nothing in the model stores them; [`Coordinate::box_index`]
//! derives one from coordinate arithmetic when needed.

use std::fmt;

/// Side length of the grid.
pub const GRID_SIZE: usize = 9;

/// Side length of a box.
pub const BOX_SIZE: usize = 3;

/// Highest valid column or row index.
const MAX_INDEX: u8 = (GRID_SIZE - 1) as u8;

/// A cell position: `(column, row)`, both in `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    column: u8,
    row: u8,
}

impl Coordinate {
    /// Top-left cell.
    pub const ORIGIN: Self = Self { column: 0, row: 0 };

    /// Returns `None` if either axis is outside the grid.
    pub fn new(column: u8, row: u8) -> Option<Self> {
        (column <= MAX_INDEX && row <= MAX_INDEX).then_some(Self { column, row })
    }

    pub fn column(self) -> u8 {
        self.column
    }

    pub fn row(self) -> u8 {
        self.row
    }

    /// The neighbouring coordinate in `direction`, clamped to the grid edge.
    ///
    /// Stepping off an edge returns `self` unchanged on that axis.
    pub fn step(self, direction: Direction) -> Self {
        let Self { column, row } = self;
        match direction {
            Direction::Up => Self { column, row: row.saturating_sub(1) },
            Direction::Down => Self { column, row: (row + 1).min(MAX_INDEX) },
            Direction::Left => Self { column: column.saturating_sub(1), row },
            Direction::Right => Self { column: (column + 1).min(MAX_INDEX), row },
        }
    }

    /// `(box_row, box_column)` of the 3×3 box containing this cell.
    pub fn box_index(self) -> (u8, u8) {
        let size = BOX_SIZE as u8;
        (self.row / size, self.column / size)
    }

    /// All 81 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=MAX_INDEX).flat_map(|row| (0..=MAX_INDEX).map(move |column| Self { column, row }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

/// A storable digit, `1..=9`. Zero is not a value; it means "clear".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` for anything outside `1..=9`.
    pub fn new(value: u8) -> Option<Self> {
        (1..=9).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One grid position. Focus is not stored here; see `GridState::is_focused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    value: Option<Digit>,
}

impl Cell {
    pub fn value(&self) -> Option<Digit> {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    pub fn set(&mut self, digit: Digit) {
        self.value = Some(digit);
    }

    pub fn clear(&mut self) {
        self.value = None;
    }
}
