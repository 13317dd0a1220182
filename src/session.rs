/*
session.rs

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

//! Play session.
//!
//! A [`Session`] object owns the [`Game`] object being played. After each operation that changes
//! the game, the session saves the game with its [`SaverGame`] object, and then calls the
//! listeners registered with [`Session::subscribe`] so that they redraw the game.
//!
//! The session also exposes the debug operations. They are only available when the session is
//! created with debug tools enabled.

use log::{debug, warn};

use crate::game::{Game, GameState, GameView};
use crate::generator::cell::Direction;
use crate::generator::random_path::GenerationError;
use crate::params::GameParams;
use crate::saver::game::SaverGame;

/// Function called after each change.
pub type Listener = Box<dyn FnMut(&GameView)>;

/// [`Session`] object.
pub struct Session {
    /// Game in progress.
    game: Game,

    /// Save file. Nothing is saved when None.
    saver: Option<SaverGame>,

    /// Functions to call after each change.
    listeners: Vec<Listener>,

    /// Whether the debug operations are available.
    debug_tools: bool,
}

impl Session {
    /// Create a [`Session`] object with an idle game. Use [`Session::start`] to start playing.
    pub fn new(saver: Option<SaverGame>, debug_tools: bool) -> Self {
        Self {
            game: Game::new(),
            saver,
            listeners: Vec::new(),
            debug_tools,
        }
    }

    /// Start playing.
    ///
    /// When `resume` is true, the saved game is restored if there is a usable one. Otherwise a new
    /// game is created from `params`.
    ///
    /// # Errors
    ///
    /// The method returns an error when no path can be generated for the dimensions.
    pub fn start(&mut self, params: GameParams, resume: bool) -> Result<(), GenerationError> {
        if resume && let Some(game) = self.saver.as_ref().and_then(|s| s.get_game()) {
            debug!("Resuming the saved game");
            self.game = game;
        } else {
            self.game.new_game(Some(params))?;
        }
        self.changed();
        Ok(())
    }

    /// Register a function to call after each change.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameView) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Return the game in progress.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Whether the debug operations are available.
    pub fn debug_tools(&self) -> bool {
        self.debug_tools
    }

    /// See [`Game::play`].
    pub fn play(&mut self, x: usize, y: usize) -> bool {
        let changed: bool = self.game.play(x, y);
        self.after(changed)
    }

    /// See [`Game::play_hint`].
    pub fn play_hint(&mut self) -> bool {
        let changed: bool = self.game.play_hint();
        self.after(changed)
    }

    /// See [`Game::step`].
    pub fn step(&mut self, direction: Direction) -> bool {
        let changed: bool = self.game.step(direction);
        self.after(changed)
    }

    /// See [`Game::play_top`].
    pub fn play_top(&mut self, column: usize) -> bool {
        let changed: bool = self.game.play_top(column);
        self.after(changed)
    }

    /// Retry the same path. Only possible after a failure.
    pub fn retry(&mut self) -> bool {
        if self.game.state() != GameState::Failed {
            return false;
        }
        self.game.retry();
        self.after(true)
    }

    /// Start a new game. See [`Game::new_game`].
    ///
    /// # Errors
    ///
    /// The method returns an error when no path can be generated. The game in progress is kept.
    pub fn new_game(&mut self, params: Option<GameParams>) -> Result<(), GenerationError> {
        self.game.new_game(params)?;
        self.changed();
        Ok(())
    }

    /// Return the hidden path as an ASCII grid, or None when the debug tools are disabled.
    pub fn show_path(&self) -> Option<String> {
        self.debug_tools.then(|| self.game.path_grid())
    }

    /// Win immediately. Does nothing when the debug tools are disabled.
    pub fn auto_win(&mut self) -> bool {
        if !self.debug_tools {
            return false;
        }
        let changed: bool = self.game.auto_win();
        self.after(changed)
    }

    fn after(&mut self, changed: bool) -> bool {
        if changed {
            self.changed();
        }
        changed
    }

    /// Save the game and call the listeners.
    fn changed(&mut self) {
        debug!("Game {} (attempt {})", self.game.state(), self.game.attempt());
        if let Some(saver) = &self.saver
            && let Err(e) = saver.save_game(&self.game)
        {
            warn!("Cannot save the game: {e}");
        }
        let view: GameView = self.game.view();
        for listener in self.listeners.iter_mut() {
            listener(&view);
        }
    }
}
