/*
cell.rs

Copyright 2025 Hervé Quatremain

This file is part of Find the Path.

Find the Path is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Find the Path is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Find the Path. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Grid coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Orthogonal directions.
///
/// The discriminant order is the order in which neighbors are listed by [`Cell::neighbors`],
/// which drives the random choices of the path generator. Do not reorder.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// All the directions, in neighbor order.
    pub fn all() -> impl Iterator<Item = Direction> {
        (0..4).filter_map(Direction::from_repr)
    }
}

/// Cell coordinates (column, row). Both start at 0. Row 0 is the top row.
///
/// Serialized as a `[x, y]` array.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Cell {
    /// Column.
    pub x: usize,

    /// Row.
    pub y: usize,
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Cell {
    /// Create a [`Cell`] object.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Return the adjacent cell in the given direction, or None if it would have a negative
    /// coordinate. The upper bounds of the grid are not verified.
    pub fn step(&self, direction: Direction) -> Option<Cell> {
        match direction {
            Direction::Right => Some(Cell::new(self.x + 1, self.y)),
            Direction::Left => self.x.checked_sub(1).map(|x| Cell::new(x, self.y)),
            Direction::Down => Some(Cell::new(self.x, self.y + 1)),
            Direction::Up => self.y.checked_sub(1).map(|y| Cell::new(self.x, y)),
        }
    }

    /// Return the orthogonal neighbors (right, left, down, up), without the ones with a negative
    /// coordinate.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        Direction::all().filter_map(move |d| self.step(d))
    }

    /// Whether the two cells share an edge.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}
