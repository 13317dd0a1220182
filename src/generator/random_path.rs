/*
random_path.rs

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

//! Generate a random path.
//!
//! Randomized depth-first search with backtracking. The search starts from a random cell of the
//! top row and stops at the first cell that reaches the bottom row. At each step the valid
//! neighbors of the current cell are shuffled and tried in that order.
//!
//! The first complete branch wins, so the generated paths are not uniformly distributed among
//! all the possible paths.
//!
//! The search uses an explicit stack instead of recursion so that large grids do not grow the call
//! stack. It consumes the random values in exactly the same order as the recursive formulation.

use log::debug;
use std::time::Instant;
use thiserror::Error;

use super::cell::Cell;
use super::lehmer::Lehmer;
use crate::config::{MAX_COLUMNS, MAX_ROWS};
use super::path::Path;

/// Type of errors.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No possible path for the grid dimensions.
    #[error("No path exists in a grid of {columns} columns and {rows} rows")]
    NoPath { columns: usize, rows: usize },

    /// The grid exceeds [`MAX_COLUMNS`] or [`MAX_ROWS`].
    #[error("The grid of {columns} columns and {rows} rows is too large")]
    TooLarge { columns: usize, rows: usize },
}

/// [`RandomPath`] object.
pub struct RandomPath {
    /// Number of columns in the grid.
    pub columns: usize,

    /// Number of rows in the grid.
    pub rows: usize,

    /// Number of cells that were expanded to generate the last random path.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last random path.
    pub duration: f32,
}

impl RandomPath {
    /// Create the object.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Generate and return a random path.
    ///
    /// The first random value of `rng` selects the starting column.
    ///
    /// # Errors
    ///
    /// The method returns an error if no path exists. This only happens for degenerated grids,
    /// with no rows or no columns. Grids larger than [`MAX_COLUMNS`] by [`MAX_ROWS`] are
    /// rejected before any allocation.
    pub fn generate(&mut self, rng: &mut Lehmer) -> Result<Path, GenerationError> {
        self.iteration = 0;
        self.duration = 0.0;
        let start: Instant = Instant::now();

        if self.columns == 0 || self.rows == 0 {
            debug!("Empty grid {}x{}", self.columns, self.rows);
            return Err(self.no_path());
        }
        if self.columns > MAX_COLUMNS || self.rows > MAX_ROWS {
            debug!("Grid {}x{} too large", self.columns, self.rows);
            return Err(GenerationError::TooLarge {
                columns: self.columns,
                rows: self.rows,
            });
        }

        let starting_column: usize = rng.next_in_range(0, self.columns - 1);
        debug!(
            "Starting column = {}  Grid = {}x{}",
            starting_column, self.columns, self.rows
        );

        let mut path: Path = Path::new(self.rows);
        path.push(Cell::new(starting_column, 0));
        let found: bool = self.find_path(rng, &mut path);

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}",
            self.iteration, self.duration
        );
        if found {
            Ok(path)
        } else {
            Err(self.no_path())
        }
    }

    fn no_path(&self) -> GenerationError {
        GenerationError::NoPath {
            columns: self.columns,
            rows: self.rows,
        }
    }

    /// Extend `path` until it reaches the bottom row.
    ///
    /// `frames[i]` holds the candidates still to try after `path[i]`, in reverse order so that
    /// the next one to try is at the end. A frame is created when its cell becomes the tip.
    fn find_path(&mut self, rng: &mut Lehmer, path: &mut Path) -> bool {
        let mut frames: Vec<Vec<Cell>> = Vec::with_capacity(path.len());

        while let Some(tip) = path.last() {
            if frames.len() < path.len() {
                if tip.y == self.rows - 1 {
                    return true;
                }
                self.iteration += 1;
                let mut candidates: Vec<Cell> =
                    shuffle(path.valid_next(self.columns, self.rows, tip), rng);
                candidates.reverse();
                frames.push(candidates);
            }

            match frames.last_mut().and_then(|frame| frame.pop()) {
                Some(next) => {
                    debug!("    Selecting {tip} -> {next}");
                    path.push(next);
                }
                None => {
                    debug!("    Back: no eligible cell from {tip}");
                    frames.pop();
                    path.pop();
                }
            }
        }
        false
    }
}

/// Shuffle the cells by repeatedly drawing and removing one of the remaining cells.
fn shuffle(mut cells: Vec<Cell>, rng: &mut Lehmer) -> Vec<Cell> {
    let mut shuffled: Vec<Cell> = Vec::with_capacity(cells.len());
    while !cells.is_empty() {
        let i: usize = rng.next_in_range(0, cells.len() - 1);
        shuffled.push(cells.remove(i));
    }
    shuffled
}
