/*
generator.rs

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

//! Generate the hidden path.
//!
//! A game is played on a grid of [`cell::Cell`] objects. The hidden path goes from a cell of the
//! top row to a cell of the bottom row, and is represented by a [`path::Path`] object.
//!
//! You create the hidden path by creating a [`random_path::RandomPath`] object and by using its
//! [`random_path::RandomPath::generate`] method.
//! The random choices come from a [`lehmer::Lehmer`] generator so that the same seed always
//! produces the same path, on any implementation that follows the same algorithm.
//!
//! A path never touches itself: a cell can be added to the path only if exactly one of its
//! orthogonal neighbors is already in the path (see [`path::Path::is_valid_next`]).
//! The same rule computes the moves a player can make (see [`path::Path::valid_next`]).

pub mod cell;
pub mod lehmer;
pub mod path;
pub mod random_path;
