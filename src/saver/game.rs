/*
game.rs

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

//! Save and restore the game in progress when quitting or starting Find the Path.
//!
//! After each change, the game status is saved in the `savegame.json` file.
//! When Find the Path is restarted, the saved game is loaded, and the player can continue.
//!
//! The saved object is a [`Snapshot`]: a version tag, a fixed list of the [`Game`] fields, and a
//! checksum of these fields. Only the fields of [`SnapshotState`] are ever saved.
//!
//! A saved game is discarded, never partially restored, when its version is not
//! [`SNAPSHOT_VERSION`], when its checksum does not match, or when its content cannot be read.
//! The checksum reuses the seed hash ([`crate::seed::checksum`]): it detects accidental
//! corruption, it does not protect against tampering.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{MAX_COLUMNS, MAX_ROWS, SAVE_FILE_NAME, SNAPSHOT_VERSION};
use crate::game::{Game, Outcome};
use crate::generator::cell::Cell;
use crate::generator::path::Path;
use crate::params::GameParams;
use crate::seed;

/// Errors when saving a game.
#[derive(Error, Debug)]
pub enum SaverError {
    #[error("Cannot write the save file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot serialize the game: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons for discarding a saved game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Unsupported version {found:?}")]
    Version { found: String },

    #[error("Checksum mismatch: stored {stored}, computed {computed}")]
    Checksum { stored: String, computed: String },

    #[error("Cannot parse the saved game: {0}")]
    Json(String),

    #[error("Inconsistent saved game: {0}")]
    Inconsistent(&'static str),
}

impl From<serde_json::Error> for SnapshotError {
    fn from(error: serde_json::Error) -> Self {
        SnapshotError::Json(error.to_string())
    }
}

/// Saved fields of a [`Game`] object.
///
/// The field order defines the serialized text, and therefore the checksum.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotState {
    pub attempt: usize,
    pub columns: usize,
    pub rows: usize,
    pub hints: usize,
    pub current_hints: usize,
    pub current_path: Path,
    pub seed: u64,
    pub next_moves: Vec<Cell>,
    pub has_failed: bool,
    pub generated_path: Path,
    pub end_value: Option<Cell>,
}

impl From<&Game> for SnapshotState {
    fn from(game: &Game) -> Self {
        Self {
            attempt: game.attempt,
            columns: game.columns,
            rows: game.rows,
            hints: game.hints,
            current_hints: game.current_hints,
            current_path: game.current_path.clone(),
            seed: game.seed,
            next_moves: game.next_moves.clone(),
            has_failed: game.outcome.is_some_and(|o| o.has_failed()),
            generated_path: game.generated_path.clone(),
            end_value: game.outcome.map(|o| o.cell()),
        }
    }
}

impl TryFrom<SnapshotState> for Game {
    type Error = SnapshotError;

    fn try_from(state: SnapshotState) -> Result<Self, Self::Error> {
        state.check()?;
        let outcome: Option<Outcome> = state.end_value.map(|c| {
            if state.has_failed {
                Outcome::Failed(c)
            } else {
                Outcome::Won(c)
            }
        });
        Ok(Game {
            params: GameParams {
                columns: state.columns,
                rows: state.rows,
                hints: state.hints,
                seed: Some(state.seed.to_string()),
            },
            seed: state.seed,
            columns: state.columns,
            rows: state.rows,
            hints: state.hints,
            current_hints: state.current_hints,
            attempt: state.attempt,
            generated_path: state.generated_path,
            current_path: state.current_path,
            next_moves: state.next_moves,
            outcome,
        })
    }
}

impl SnapshotState {
    /// Verify that the fields describe a game that can be played.
    fn check(&self) -> Result<(), SnapshotError> {
        use SnapshotError::Inconsistent;

        if self.columns == 0 || self.rows == 0 {
            return Err(Inconsistent("empty grid"));
        }
        if self.columns > MAX_COLUMNS || self.rows > MAX_ROWS {
            return Err(Inconsistent("grid too large"));
        }
        let inside = |c: &Cell| c.x < self.columns && c.y < self.rows;

        let hidden: &[Cell] = self.generated_path.get();
        if hidden.first().is_none_or(|c| c.y != 0)
            || hidden.last().is_none_or(|c| c.y != self.rows - 1)
        {
            return Err(Inconsistent("hidden path does not cross the grid"));
        }
        if !hidden.iter().all(inside) || hidden.windows(2).any(|w| !w[0].is_adjacent(&w[1])) {
            return Err(Inconsistent("hidden path is broken"));
        }
        let distinct: HashSet<&Cell> = hidden.iter().collect();
        if distinct.len() != hidden.len() {
            return Err(Inconsistent("hidden path has duplicated cells"));
        }

        let revealed: &[Cell] = self.current_path.get();
        if revealed.len() >= hidden.len() || !hidden.starts_with(revealed) {
            return Err(Inconsistent("revealed path is not a prefix of the hidden path"));
        }
        if !self.next_moves.iter().all(inside) || !self.end_value.iter().all(inside) {
            return Err(Inconsistent("cell outside the grid"));
        }
        if self.has_failed && self.end_value.is_none() {
            return Err(Inconsistent("failed game without a failed cell"));
        }
        if self.current_hints > self.hints || self.attempt == 0 {
            return Err(Inconsistent("invalid counters"));
        }
        Ok(())
    }
}

/// Saved game, as written in the save file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Format version, see [`SNAPSHOT_VERSION`].
    pub version: String,

    /// Saved fields.
    pub state: SnapshotState,

    /// Checksum of the serialized [`Snapshot::state`] field.
    pub checksum: String,
}

/// First parsing stage: the state is only parsed after the version is verified.
#[derive(Deserialize)]
struct StoredSnapshot {
    version: String,
    state: serde_json::Value,
    checksum: String,
}

impl Snapshot {
    /// Create a [`Snapshot`] object for the provided [`Game`] object.
    pub fn new(game: &Game) -> Result<Self, serde_json::Error> {
        Self::from_state(SnapshotState::from(game))
    }

    /// Create a [`Snapshot`] object for the provided fields, computing their checksum.
    pub fn from_state(state: SnapshotState) -> Result<Self, serde_json::Error> {
        let checksum: String = Self::checksum(&state)?;
        Ok(Self {
            version: SNAPSHOT_VERSION.to_string(),
            state,
            checksum,
        })
    }

    fn checksum(state: &SnapshotState) -> Result<String, serde_json::Error> {
        let text: String = serde_json::to_string(state)?;
        Ok(seed::checksum(&text).to_string())
    }

    /// Parse and verify a saved game, and return the corresponding [`Game`] object.
    pub fn restore(text: &str) -> Result<Game, SnapshotError> {
        let stored: StoredSnapshot = serde_json::from_str(text)?;
        if stored.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Version {
                found: stored.version,
            });
        }
        let state: SnapshotState = serde_json::from_value(stored.state)?;
        let computed: String = Self::checksum(&state)?;
        if computed != stored.checksum {
            return Err(SnapshotError::Checksum {
                stored: stored.checksum,
                computed,
            });
        }
        Game::try_from(state)
    }
}

/// Object to save and restore a game in progress.
pub struct SaverGame {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the game must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(SAVE_FILE_NAME);
        debug!("Save game file: {data_dir:?}");
        SaverGame {
            save_file: data_dir,
        }
    }

    /// Return the path to the save file.
    pub fn save_file(&self) -> &std::path::Path {
        &self.save_file
    }

    /// Retrieve the [`Game`] object for the saved game.
    ///
    /// Return None if there is no saved game, or if it cannot be used.
    pub fn get_game(&self) -> Option<Game> {
        let text: String = match fs::read_to_string(&self.save_file) {
            Ok(t) => t,
            Err(error) => {
                if error.kind() == ErrorKind::NotFound {
                    debug!("No saved game");
                } else {
                    warn!("Cannot read {:?}: {error}", self.save_file);
                }
                return None;
            }
        };
        match Snapshot::restore(&text) {
            Ok(game) => {
                debug!("Saved game restored (attempt {})", game.attempt());
                Some(game)
            }
            Err(error) => {
                warn!("Discarding the saved game: {error}");
                None
            }
        }
    }

    /// Save the provided [`Game`] object.
    pub fn save_game(&self, game: &Game) -> Result<(), SaverError> {
        if let Some(dir) = self.save_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, &Snapshot::new(game)?)?;
        writer.flush()?;
        Ok(())
    }
}
