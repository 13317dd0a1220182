/*
path.rs

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

//! Path in the grid.
//!
//! The same object stores the hidden path and the part of it the player revealed so far.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::cell::Cell;

/// Path object.
///
/// Serialized as the ordered list of its cells.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(from = "Vec<Cell>", into = "Vec<Cell>")]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<Cell>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Cell>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Path {}

impl From<Vec<Cell>> for Path {
    fn from(path: Vec<Cell>) -> Self {
        let visited: HashSet<Cell> = path.iter().copied().collect();
        Self { path, visited }
    }
}

impl From<Path> for Vec<Cell> {
    fn from(path: Path) -> Self {
        path.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(capacity: usize) -> Self {
        Self {
            path: Vec::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
        }
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: Cell) {
        self.path.push(cell);
        self.visited.insert(cell);
    }

    /// Remove the last cell from the path.
    pub fn pop(&mut self) -> Option<Cell> {
        let cell: Cell = self.path.pop()?;
        self.visited.remove(&cell);
        Some(cell)
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Return the cells in order.
    pub fn get(&self) -> &[Cell] {
        &self.path
    }

    /// Return the first cell in the path.
    pub fn first(&self) -> Option<Cell> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn last(&self) -> Option<Cell> {
        self.path.last().copied()
    }

    /// Whether `cell` can extend the path, in a grid of `columns` x `rows` cells.
    ///
    /// The cell must not be in the path, must be inside the grid but not in the top row, and
    /// exactly one of its orthogonal neighbors must already be in the path. The last condition
    /// prevents the path from running alongside itself.
    pub fn is_valid_next(&self, columns: usize, rows: usize, cell: Cell) -> bool {
        if self.contains(cell) {
            return false;
        }
        if cell.x >= columns || cell.y < 1 || cell.y >= rows {
            return false;
        }
        cell.neighbors().filter(|n| self.contains(*n)).count() == 1
    }

    /// Return the neighbors of `tip` that can extend the path, in neighbor order.
    pub fn valid_next(&self, columns: usize, rows: usize, tip: Cell) -> Vec<Cell> {
        tip.neighbors()
            .filter(|c| self.is_valid_next(columns, rows, *c))
            .collect()
    }

    /// Render the path as an ASCII grid: `#` for the cells in the path, `.` for the others, one
    /// line per row.
    pub fn to_grid(&self, columns: usize, rows: usize) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(rows);
        for y in 0..rows {
            let line: String = (0..columns)
                .map(|x| {
                    if self.contains(Cell::new(x, y)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect();
            lines.push(line);
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cells: &[(usize, usize)]) -> Path {
        Path::from(cells.iter().map(|c| Cell::from(*c)).collect::<Vec<Cell>>())
    }

    #[test]
    fn push_and_pop_keep_lookup_in_sync() {
        let mut p = Path::new(4);
        p.push(Cell::new(1, 0));
        p.push(Cell::new(1, 1));
        assert!(p.contains(Cell::new(1, 1)));
        assert_eq!(p.pop(), Some(Cell::new(1, 1)));
        assert!(!p.contains(Cell::new(1, 1)));
        assert_eq!(p.len(), 1);
        assert_eq!(p.last(), Some(Cell::new(1, 0)));
    }

    #[test]
    fn top_row_is_never_valid() {
        let p = path(&[(1, 0)]);
        assert!(!p.is_valid_next(5, 5, Cell::new(0, 0)));
        assert!(!p.is_valid_next(5, 5, Cell::new(2, 0)));
        assert_eq!(p.valid_next(5, 5, Cell::new(1, 0)), vec![Cell::new(1, 1)]);
    }

    #[test]
    fn cells_outside_the_grid_are_rejected() {
        let p = path(&[(4, 0), (4, 1)]);
        assert!(!p.is_valid_next(5, 2, Cell::new(4, 2)));
        assert!(!p.is_valid_next(5, 3, Cell::new(5, 1)));
        assert!(p.is_valid_next(5, 3, Cell::new(4, 2)));
    }

    #[test]
    fn path_cannot_touch_itself() {
        // .#..
        // .##.
        // ....
        let p = path(&[(1, 0), (1, 1), (2, 1)]);
        assert!(!p.is_valid_next(4, 3, Cell::new(2, 0)));
        assert_eq!(
            p.valid_next(4, 3, Cell::new(2, 1)),
            vec![Cell::new(3, 1), Cell::new(2, 2)]
        );

        // Turning back towards the start would touch (1, 1)
        let p = path(&[(1, 0), (1, 1), (1, 2), (2, 2), (2, 3)]);
        assert!(!p.is_valid_next(4, 5, Cell::new(2, 1)));
    }

    #[test]
    fn grid_rendering() {
        let p = path(&[(1, 0), (1, 1), (2, 1), (2, 2)]);
        assert_eq!(p.to_grid(3, 3), ".#.\n.##\n..#");
    }

    #[test]
    fn equality_ignores_capacity() {
        let mut a = Path::new(100);
        a.push(Cell::new(0, 0));
        assert_eq!(a, path(&[(0, 0)]));
    }
}
