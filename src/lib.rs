/*
lib.rs

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

//! Find the Path: rediscover a hidden path from the top to the bottom of a grid.
//!
//! A hidden path is generated from a seed (see [`seed`] and [`generator`]). The player reveals
//! it one cell at a time, and fails as soon as they play a cell outside of the path (see
//! [`game`]). The game in progress is saved after each change (see [`saver`]).
//!
//! [`session::Session`] ties these parts together for front ends such as [`console`].

pub mod cli_options;
pub mod config;
pub mod console;
pub mod game;
pub mod generator;
pub mod params;
pub mod saver;
pub mod seed;
pub mod session;
