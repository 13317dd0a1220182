/*
config.rs

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

//! Build-time constants.

/// Package name, also used for the data directory name.
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Text displayed by `--version` in long format.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

/// Version tag written in every snapshot.
///
/// Bumping this value invalidates all the previously saved games: there is no migration between
/// versions.
pub const SNAPSHOT_VERSION: &str = "1";

/// Name of the save file in the data directory.
pub const SAVE_FILE_NAME: &str = "savegame.json";

/// Default number of columns.
pub const DEFAULT_COLUMNS: usize = 5;

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 10;

/// Default number of hints per game.
pub const DEFAULT_HINTS: usize = 2;

/// Largest accepted number of columns.
pub const MAX_COLUMNS: usize = 100;

/// Largest accepted number of rows.
pub const MAX_ROWS: usize = 100;
