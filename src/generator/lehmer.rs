/*
lehmer.rs

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

//! Deterministic pseudo-random number generator.
//!
//! Lehmer generator (linear congruential generator with no increment) using the MINSTD
//! parameters: modulus 2^31 - 1 and multiplier 48271.
//!
//! The sequence must be bit-identical across runs and implementations, because players share
//! seeds: a seed must reproduce the same hidden path everywhere. For that reason
//! [`Lehmer::next_in_range`] uses floating point arithmetic in a fixed operation order instead
//! of an integer reduction.

use log::debug;

use crate::seed::{self, SeedInput};

/// Modulus, 2^31 - 1.
pub const MODULUS: u64 = 2_147_483_647;

/// Multiplier.
pub const MULTIPLIER: u64 = 48_271;

/// Increment.
pub const INCREMENT: u64 = 0;

/// [`Lehmer`] generator object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lehmer {
    /// Current state. Never zero.
    state: u64,
}

impl Default for Lehmer {
    fn default() -> Self {
        Self::new(SeedInput::Absent)
    }
}

impl Lehmer {
    /// Create a [`Lehmer`] object seeded with the given value.
    pub fn new(input: SeedInput) -> Self {
        let mut generator = Self { state: 1 };
        generator.seed(input);
        generator
    }

    /// Create a generator for a new game.
    ///
    /// One value is drawn and dropped right after seeding. When the seed defaults to the current
    /// timestamp, consecutive games have close seeds, and the first value would be close too.
    pub fn for_game(seed: u64) -> Self {
        let mut generator = Self { state: 1 };
        generator.seed_with(seed);
        generator.next_value();
        generator
    }

    /// Reseed the generator.
    pub fn seed(&mut self, input: SeedInput) {
        self.seed_with(seed::derive_seed(input));
    }

    /// Reseed the generator with an already normalized seed.
    pub fn seed_with(&mut self, seed: u64) {
        self.state = match seed % MODULUS {
            // A zero state would only produce zeros
            0 => 1,
            s => s,
        };
        debug!("Generator seeded with {seed} (state {})", self.state);
    }

    /// Return the current state.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advance the generator and return the new state, in `[1, MODULUS)`.
    pub fn next_value(&mut self) -> u64 {
        self.state = (MULTIPLIER * self.state + INCREMENT) % MODULUS;
        self.state
    }

    /// Return a value in the inclusive range `[min, max]`.
    pub fn next_in_range(&mut self, min: usize, max: usize) -> usize {
        debug_assert!(min <= max, "empty range {min}..={max}");
        let size: f64 = (max - min + 1) as f64;
        let ratio: f64 = self.next_value() as f64 / MODULUS as f64;
        (ratio * size).floor() as usize + min
    }
}
