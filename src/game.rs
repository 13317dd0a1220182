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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object owns the hidden path, the part of it that the player revealed, the list of
//! the cells the player can play next (the frontier), the hint budget, and the attempt counter.
//!
//! Expected game events (wrong guess, no more hints, game already over) are not errors: the
//! operations return `false` when they did not change anything.

use log::{debug, info, warn};
use std::fmt;

use crate::generator::cell::{Cell, Direction};
use crate::generator::lehmer::Lehmer;
use crate::generator::path::Path;
use crate::generator::random_path::{GenerationError, RandomPath};
use crate::params::GameParams;
use crate::seed;

/// How the game ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The player reached the bottom row. The cell is the last cell played.
    Won(Cell),

    /// The player left the hidden path. The cell is the wrong guess, which is never added to the
    /// revealed path.
    Failed(Cell),
}

impl Outcome {
    /// Return the cell that ended the game.
    pub fn cell(&self) -> Cell {
        match self {
            Outcome::Won(c) | Outcome::Failed(c) => *c,
        }
    }

    /// Whether the player lost.
    pub fn has_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

/// Game states.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    /// No game has been generated yet.
    Idle,
    InProgress,
    Won,
    Failed,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameState::Idle => write!(f, "idle"),
            GameState::InProgress => write!(f, "in progress"),
            GameState::Won => write!(f, "won"),
            GameState::Failed => write!(f, "failed"),
        }
    }
}

/// Read-only view of the game that renderers use after each change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameView<'a> {
    /// Cells of the hidden path that the player found so far.
    pub revealed: &'a [Cell],

    /// Cells that the player can play next.
    pub frontier: &'a [Cell],

    /// How the game ended, if it did.
    pub outcome: Option<Outcome>,

    /// Attempt number, starting at 1.
    pub attempt: usize,

    /// Remaining hints.
    pub current_hints: usize,

    /// Hints available at the beginning of the game.
    pub hints: usize,

    /// Active seed, to display or share.
    pub seed: u64,

    /// Number of columns.
    pub columns: usize,

    /// Number of rows.
    pub rows: usize,
}

/// Manage the status of the game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Parameters used to create the game.
    pub(crate) params: GameParams,

    /// Normalized seed of the game.
    pub(crate) seed: u64,

    /// Number of columns.
    pub(crate) columns: usize,

    /// Number of rows.
    pub(crate) rows: usize,

    /// Number of hints at the beginning of the game.
    pub(crate) hints: usize,

    /// Remaining hints.
    pub(crate) current_hints: usize,

    /// Attempt number. Incremented each time the player retries.
    pub(crate) attempt: usize,

    /// Hidden path.
    pub(crate) generated_path: Path,

    /// Revealed part of the hidden path.
    pub(crate) current_path: Path,

    /// Cells that the player can play next.
    pub(crate) next_moves: Vec<Cell>,

    /// End of the game.
    pub(crate) outcome: Option<Outcome>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create an idle [`Game`] object. Use [`Game::new_game`] to start playing.
    pub fn new() -> Self {
        Self {
            params: GameParams::default(),
            seed: 0,
            columns: 0,
            rows: 0,
            hints: 0,
            current_hints: 0,
            attempt: 0,
            generated_path: Path::default(),
            current_path: Path::default(),
            next_moves: Vec::new(),
            outcome: None,
        }
    }

    /// Start a new game.
    ///
    /// With `params`, the game uses these dimensions, hints, and seed. Without, the game keeps
    /// the current dimensions and hints, and uses a fresh seed derived from the current time.
    ///
    /// # Errors
    ///
    /// The method returns an error if no path can be generated for the dimensions. In that case
    /// the current game is left untouched.
    pub fn new_game(&mut self, params: Option<GameParams>) -> Result<(), GenerationError> {
        let params: GameParams = match params {
            Some(p) => p,
            None => GameParams {
                seed: None,
                ..self.params.clone()
            },
        };
        let seed: u64 = seed::derive_seed(params.seed_input());
        self.new_game_with_seed(params, seed)
    }

    /// Start a new game with an already normalized seed. The seed in `params` is ignored.
    ///
    /// # Errors
    ///
    /// See [`Game::new_game`].
    pub fn new_game_with_seed(
        &mut self,
        params: GameParams,
        seed: u64,
    ) -> Result<(), GenerationError> {
        let mut rng: Lehmer = Lehmer::for_game(seed);
        let path: Path = RandomPath::new(params.columns, params.rows).generate(&mut rng)?;
        info!(
            "New game {}x{} with seed {seed}: hidden path of {} cells",
            params.columns,
            params.rows,
            path.len()
        );

        self.seed = seed;
        self.columns = params.columns;
        self.rows = params.rows;
        self.hints = params.hints;
        self.current_hints = params.hints;
        self.params = params;
        self.generated_path = path;
        self.attempt = 0;
        self.retry();
        Ok(())
    }

    /// Restart the game with the same hidden path.
    pub fn retry(&mut self) {
        self.attempt += 1;
        self.current_path.clear();
        self.outcome = None;
        self.next_moves = (0..self.columns).map(|x| Cell::new(x, 0)).collect();
        debug!("Attempt {}", self.attempt);
    }

    /// Play the cell at column `x` and row `y`.
    ///
    /// Nothing happens if the game is over or if the cell is not in the frontier. Return whether
    /// the game changed.
    pub fn play(&mut self, x: usize, y: usize) -> bool {
        let cell: Cell = Cell::new(x, y);
        if self.outcome.is_some() || !self.next_moves.contains(&cell) {
            return false;
        }

        if !self.generated_path.contains(cell) {
            debug!("Failed at {cell}");
            self.outcome = Some(Outcome::Failed(cell));
        } else if y == self.rows - 1 {
            info!("Won at {cell} after {} attempts", self.attempt);
            self.outcome = Some(Outcome::Won(cell));
        } else {
            self.current_path.push(cell);
            self.next_moves = self.current_path.valid_next(self.columns, self.rows, cell);
            debug!("Played {cell}: next moves {:?}", self.next_moves);
        }
        true
    }

    /// Play the frontier cell that is on the hidden path, using one hint.
    ///
    /// Nothing happens if the game is over or if there are no hints left. Return whether the game
    /// changed.
    pub fn play_hint(&mut self) -> bool {
        if self.outcome.is_some() || self.current_hints == 0 {
            return false;
        }
        self.current_hints -= 1;
        debug!("Hint used, {} left", self.current_hints);

        match self
            .next_moves
            .iter()
            .copied()
            .find(|c| self.generated_path.contains(*c))
        {
            Some(cell) => {
                self.play(cell.x, cell.y);
            }
            None => warn!("No cell of the frontier is on the hidden path"),
        }
        true
    }

    /// Play the neighbor of the last revealed cell in the given direction.
    pub fn step(&mut self, direction: Direction) -> bool {
        match self.current_path.last().and_then(|tip| tip.step(direction)) {
            Some(cell) => self.play(cell.x, cell.y),
            None => false,
        }
    }

    /// Play the given column of the top row. Only possible for the first move.
    pub fn play_top(&mut self, column: usize) -> bool {
        if !self.current_path.is_empty() {
            return false;
        }
        self.play(column, 0)
    }

    /// Reveal the whole hidden path and win.
    pub fn auto_win(&mut self) -> bool {
        let mut revealed: Path = self.generated_path.clone();
        let Some(last) = revealed.pop() else {
            return false;
        };
        self.current_path = revealed;
        self.next_moves = vec![last];
        self.outcome = None;
        self.play(last.x, last.y)
    }

    /// Return the hidden path as an ASCII grid.
    pub fn path_grid(&self) -> String {
        self.generated_path.to_grid(self.columns, self.rows)
    }

    /// Return the game state.
    pub fn state(&self) -> GameState {
        match self.outcome {
            _ if self.generated_path.is_empty() => GameState::Idle,
            None => GameState::InProgress,
            Some(Outcome::Won(_)) => GameState::Won,
            Some(Outcome::Failed(_)) => GameState::Failed,
        }
    }

    /// Return a view of the game for renderers.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            revealed: self.current_path.get(),
            frontier: &self.next_moves,
            outcome: self.outcome,
            attempt: self.attempt,
            current_hints: self.current_hints,
            hints: self.hints,
            seed: self.seed,
            columns: self.columns,
            rows: self.rows,
        }
    }

    /// Return the parameters of the game.
    pub fn params(&self) -> &GameParams {
        &self.params
    }

    /// Return the normalized seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Return the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Return the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of hints at the beginning of the game.
    pub fn hints(&self) -> usize {
        self.hints
    }

    /// Return the number of remaining hints.
    pub fn current_hints(&self) -> usize {
        self.current_hints
    }

    /// Return the attempt number.
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    /// Return the hidden path.
    pub fn generated_path(&self) -> &Path {
        &self.generated_path
    }

    /// Return the revealed path.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Return the cells that can be played next.
    pub fn next_moves(&self) -> &[Cell] {
        &self.next_moves
    }

    /// Return the end of the game.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Seed 42 on a 5x3 grid hides the path (2,0) (2,1) (1,1) (1,2):
    //
    // ..#..
    // .##..
    // .#...
    fn small_game(hints: usize) -> Game {
        let mut game = Game::new();
        let params = GameParams {
            columns: 5,
            rows: 3,
            hints,
            seed: None,
        };
        game.new_game_with_seed(params, 42).unwrap();
        game
    }

    #[test]
    fn idle_game_ignores_moves() {
        let mut game = Game::new();
        assert_eq!(game.state(), GameState::Idle);
        assert!(!game.play(0, 0));
        assert!(!game.play_hint());
        assert!(!game.auto_win());
        assert_eq!(game, Game::new());
    }

    #[test]
    fn new_game_starts_first_attempt() {
        let game = small_game(2);
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.attempt(), 1);
        assert_eq!(game.current_hints(), 2);
        assert!(game.current_path().is_empty());
        assert_eq!(
            game.next_moves(),
            (0..5).map(|x| Cell::new(x, 0)).collect::<Vec<Cell>>()
        );
        assert_eq!(game.path_grid(), "..#..\n.##..\n.#...");
    }

    #[test]
    fn walking_the_path_wins() {
        let mut game = small_game(2);
        assert!(game.play(2, 0));
        assert_eq!(game.next_moves(), &[Cell::new(2, 1)]);
        assert!(game.play(2, 1));
        assert!(game.play(1, 1));
        assert!(game.play(1, 2));
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.outcome(), Some(Outcome::Won(Cell::new(1, 2))));
        // The winning cell is not appended to the revealed path
        assert_eq!(game.current_path().len(), 3);
        assert!(!game.play(1, 2));
    }

    #[test]
    fn frontier_follows_the_connectivity_rule() {
        let mut game = small_game(0);
        for cell in [Cell::new(2, 0), Cell::new(2, 1), Cell::new(1, 1)] {
            assert!(game.play(cell.x, cell.y));
            let expected = game.current_path().valid_next(5, 3, cell);
            assert_eq!(game.next_moves(), expected.as_slice());
        }
        // From (1, 1): (0, 1) and (1, 2) are valid, (1, 0) is in the top row
        assert_eq!(game.next_moves(), &[Cell::new(0, 1), Cell::new(1, 2)]);
    }

    #[test]
    fn wrong_guess_fails_once() {
        let mut game = small_game(2);
        assert!(game.play(0, 0));
        assert_eq!(game.state(), GameState::Failed);
        assert_eq!(game.outcome(), Some(Outcome::Failed(Cell::new(0, 0))));
        assert!(game.current_path().is_empty());

        let before = game.clone();
        assert!(!game.play(0, 0));
        assert_eq!(game, before);
    }

    #[test]
    fn failing_in_the_middle() {
        let mut game = small_game(2);
        game.play(2, 0);
        game.play(2, 1);
        assert!(game.play(3, 1));
        assert_eq!(game.outcome(), Some(Outcome::Failed(Cell::new(3, 1))));
        assert_eq!(game.current_path().len(), 2);
    }

    #[test]
    fn cells_outside_the_frontier_are_ignored() {
        let mut game = small_game(2);
        let before = game.clone();
        assert!(!game.play(2, 1));
        assert!(!game.play(9, 9));
        assert_eq!(game, before);
    }

    #[test]
    fn retry_resets_the_attempt() {
        let mut game = small_game(2);
        game.play(2, 0);
        game.play(2, 1);
        game.play(3, 1);
        assert_eq!(game.state(), GameState::Failed);
        game.retry();
        assert_eq!(game.attempt(), 2);
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.current_path().is_empty());
        assert_eq!(game.next_moves().len(), 5);
        // The hidden path does not change
        assert!(game.play(2, 0));
    }

    #[test]
    fn hints_reveal_the_path() {
        let mut game = small_game(5);
        assert!(game.play_hint());
        assert_eq!(game.current_path().get(), &[Cell::new(2, 0)]);
        assert!(game.play_hint());
        assert!(game.play_hint());
        assert!(game.play_hint());
        assert_eq!(game.outcome(), Some(Outcome::Won(Cell::new(1, 2))));
        assert_eq!(game.current_hints(), 1);
        assert!(!game.play_hint());
        assert_eq!(game.current_hints(), 1);
    }

    #[test]
    fn no_hint_left() {
        let mut game = small_game(0);
        let before = game.clone();
        assert!(!game.play_hint());
        assert_eq!(game, before);
    }

    #[test]
    fn hints_are_kept_on_retry() {
        let mut game = small_game(2);
        game.play_hint();
        game.retry();
        assert_eq!(game.current_hints(), 1);
    }

    #[test]
    fn relative_moves() {
        let mut game = small_game(0);
        assert!(!game.step(Direction::Down));
        assert!(game.play_top(2));
        assert!(!game.play_top(2));
        assert!(game.step(Direction::Down));
        assert!(game.step(Direction::Left));
        assert!(game.step(Direction::Down));
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn auto_win_reveals_everything() {
        let mut game = small_game(0);
        game.play(0, 0);
        assert!(game.auto_win());
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.outcome().map(|o| o.cell()), Some(Cell::new(1, 2)));
        assert_eq!(
            game.current_path().get(),
            &[Cell::new(2, 0), Cell::new(2, 1), Cell::new(1, 1)]
        );
    }

    #[test]
    fn new_game_without_parameters_keeps_dimensions() {
        let mut game = small_game(3);
        game.play(0, 0);
        game.new_game(None).unwrap();
        assert_eq!((game.columns(), game.rows(), game.hints()), (5, 3, 3));
        assert_eq!(game.params().seed, None);
        assert_eq!(game.attempt(), 1);
        assert_eq!(game.state(), GameState::InProgress);
    }

    #[test]
    fn new_game_with_text_seed_is_reproducible() {
        let params = GameParams::from_query("columns=5&rows=3&seed=42");
        let mut a = Game::new();
        a.new_game(Some(params.clone())).unwrap();
        let mut b = Game::new();
        b.new_game(Some(params)).unwrap();
        assert_eq!(a.seed(), 42);
        assert_eq!(a.generated_path(), b.generated_path());
        assert_eq!(a.generated_path(), small_game(0).generated_path());
    }

    #[test]
    fn failed_generation_keeps_the_game() {
        let mut game = small_game(2);
        game.play(2, 0);
        let before = game.clone();
        let params = GameParams {
            columns: 0,
            ..GameParams::default()
        };
        assert!(game.new_game(Some(params)).is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn single_row_wins_on_first_move() {
        let mut game = Game::new();
        let params = GameParams {
            columns: 3,
            rows: 1,
            hints: 1,
            seed: None,
        };
        game.new_game_with_seed(params, 5).unwrap();
        let start = game.generated_path().first().unwrap();
        assert!(game.play(start.x, start.y));
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn state_names() {
        let mut game = Game::new();
        assert_eq!(game.state().to_string(), "idle");
        game.new_game_with_seed(GameParams::default(), 42).unwrap();
        assert_eq!(game.state().to_string(), "in progress");
        game.auto_win();
        assert_eq!(format!("{}", game.state()), "won");
        assert_eq!(GameState::Failed.to_string(), "failed");
    }
}
