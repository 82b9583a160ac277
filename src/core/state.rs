//! # Grid State
//!
//! Core state for sudogrid. Domain data only - no TUI-specific types.
//! Styling lives in the `tui` module.
//!
//! ```text
//! GridState
//! ├── cells: [[Cell; 9]; 9]    // indexed [row][column]
//! ├── cursor: Coordinate       // the focused cell
//! └── selection: Selection     // inert, always empty
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Focus is never stored: a cell is focused iff its coordinate equals `cursor`,
//! so there is exactly one focused cell by construction.

use std::collections::HashSet;

use crate::core::grid::{Cell, Coordinate, Digit, Direction, GRID_SIZE};

/// Coordinates marked for a multi-cell operation.
///
/// Nothing inserts into it yet. It has no mutating API, so it stays empty
/// until a multi-select mode exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: HashSet<Coordinate>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.cells.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
    cursor: Coordinate,
    selection: Selection,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl GridState {
    /// Empty grid, cursor at the origin.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::default(); GRID_SIZE]; GRID_SIZE],
            cursor: Coordinate::ORIGIN,
            selection: Selection::default(),
        }
    }

    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cell(&self, coord: Coordinate) -> &Cell {
        &self.cells[coord.row() as usize][coord.column() as usize]
    }

    pub fn focused_cell(&self) -> &Cell {
        self.cell(self.cursor)
    }

    pub fn is_focused(&self, coord: Coordinate) -> bool {
        coord == self.cursor
    }

    /// Move the cursor one cell, clamped to the grid.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.step(direction);
    }

    /// Route a keystroke to the focused cell.
    ///
    /// A single ASCII `0` clears the cell, `1`-`9` sets it. Anything else,
    /// including multi-character input, is ignored. Returns whether the key
    /// was a digit.
    pub fn input(&mut self, key: &str) -> bool {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return false;
        };
        if !c.is_ascii_digit() {
            return false;
        }

        let cell = self.focused_cell_mut();
        match Digit::new(c as u8 - b'0') {
            Some(digit) => cell.set(digit),
            None => cell.clear(),
        }
        true
    }

    /// Number of cells holding a digit.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    fn focused_cell_mut(&mut self) -> &mut Cell {
        let cursor = self.cursor;
        &mut self.cells[cursor.row() as usize][cursor.column() as usize]
    }
}
