/*
cli_options.rs

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

//! Process command-line options.
//!
//! Without options, Find the Path starts an interactive game in the terminal, resuming the saved
//! game if there is one.
//!
//! The `--print-path` option is intended for developers: it generates hidden paths and prints
//! them instead of starting a game.
//!
//! # Examples
//!
//! Play on a 8x12 grid with a seed to share:
//!
//! ```text
//! $ find-the-path --columns 8 --rows 12 --seed hello
//! ```
//!
//! Same game, with the parameters in query-string form:
//!
//! ```text
//! $ find-the-path --query '?width=8&height=12&s=hello'
//! ```
//!
//! Print three paths for the default grid with statistics:
//!
//! ```text
//! $ find-the-path --print-path --seed 42 --count 3 --summary
//! Seed 42
//! ..#..
//! .##..
//! ...
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::config::{COPYRIGHT_NOTICE, PKG_NAME};
use crate::generator::lehmer::Lehmer;
use crate::generator::path::Path;
use crate::generator::random_path::{GenerationError, RandomPath};
use crate::params::GameParams;
use crate::seed;

/// Environment variable that marks a public deployment. The debug tools are never available
/// when it is set.
pub const PUBLIC_ENV: &str = "FIND_THE_PATH_PUBLIC";

/// Find a hidden path from the top to the bottom of a grid.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
pub struct Args {
    /// Number of columns (default 5)
    #[arg(short, long, allow_negative_numbers = true)]
    pub columns: Option<i64>,

    /// Number of rows (default 10)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rows: Option<i64>,

    /// Number of hints per game (default 2)
    #[arg(long, allow_negative_numbers = true)]
    pub hints: Option<i64>,

    /// Seed. Games with the same seed and dimensions have the same path
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Parameters in query-string form, such as "columns=8&rows=12&seed=hello"
    #[arg(short, long)]
    pub query: Option<String>,

    /// Ignore the saved game. Implied by the game parameter options
    #[arg(short, long, default_value_t = false)]
    pub new: bool,

    /// Directory for the save file
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Print hidden paths instead of playing
    #[arg(short, long, default_value_t = false, group = "generate")]
    pub print_path: bool,

    /// Number of paths to print
    #[arg(long, default_value_t = 1, requires = "generate")]
    pub count: usize,

    /// Print some statistics after generating the paths
    #[arg(long, default_value_t = false, requires = "generate")]
    pub summary: bool,

    /// Enable debug messages and debug commands
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Return the game parameters. Explicit options take precedence over the query string.
    pub fn params(&self) -> GameParams {
        let mut params: GameParams = self
            .query
            .as_deref()
            .map(GameParams::from_query)
            .unwrap_or_default();
        let options: GameParams =
            GameParams::new(self.columns, self.rows, self.hints, self.seed.clone());

        if self.columns.is_some() {
            params.columns = options.columns;
        }
        if self.rows.is_some() {
            params.rows = options.rows;
        }
        if self.hints.is_some() {
            params.hints = options.hints;
        }
        if options.seed.is_some() {
            params.seed = options.seed;
        }
        params
    }

    /// Whether game parameters were given. In that case the saved game is not resumed.
    pub fn has_game_options(&self) -> bool {
        self.columns.is_some()
            || self.rows.is_some()
            || self.hints.is_some()
            || self.seed.is_some()
            || self.query.is_some()
    }

    /// Whether the debug commands are available.
    pub fn debug_tools(&self) -> bool {
        self.debug && env::var_os(PUBLIC_ENV).is_none()
    }

    /// Return the directory of the save file.
    pub fn data_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Some(dir.clone());
        }
        let base: PathBuf = match env::var_os("XDG_DATA_HOME") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(env::var_os("HOME")?).join(".local/share"),
        };
        Some(base.join(PKG_NAME))
    }
}

/// Parse the command-line options and initialize logging.
///
/// Return the options, or the exit code when the options were fully processed (developer mode).
pub fn parse() -> Result<Args, u8> {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("{args:?}");

    if args.print_path {
        return Err(print_paths(&args));
    }
    Ok(args)
}

/// Generate and print hidden paths.
fn print_paths(args: &Args) -> u8 {
    let params: GameParams = args.params();
    let first_seed: u64 = seed::derive_seed(params.seed_input());

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut iterations: usize = 0;
    let mut errors: usize = 0;

    for i in 0..args.count {
        let seed: u64 = first_seed.wrapping_add(i as u64);
        let mut rng: Lehmer = Lehmer::for_game(seed);
        let mut generator: RandomPath = RandomPath::new(params.columns, params.rows);

        let ret: Result<Path, GenerationError> = generator.generate(&mut rng);
        match ret {
            Ok(path) => {
                total += generator.duration;
                max = max.max(generator.duration);
                iterations += generator.iteration;

                // Verify the path before printing it
                let cells = path.get();
                if cells.windows(2).any(|w| !w[0].is_adjacent(&w[1]))
                    || cells.windows(3).any(|w| w[0].is_adjacent(&w[2]))
                {
                    eprintln!("Broken path for seed {seed}: {cells:?}");
                    panic!("Bug: the generated path touches itself or has gaps");
                }

                println!("Seed {seed}");
                println!("{}", path.to_grid(params.columns, params.rows));
                println!("{cells:?}\n");
            }
            Err(e) => {
                errors += 1;
                eprintln!("Seed {seed}: {e}");
            }
        }
    }

    if args.summary {
        let count: f32 = args.count.max(1) as f32;
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
            errors = {}",
            total,
            total / count,
            max,
            iterations / args.count.max(1),
            errors
        );
    }
    if errors > 0 { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from([PKG_NAME].iter().chain(argv)).unwrap()
    }

    #[test]
    fn options_override_the_query() {
        let a = args(&["--query", "width=8&h=0&seed=abc", "--columns", "6"]);
        let p = a.params();
        assert_eq!((p.columns, p.rows, p.hints), (6, 10, 0));
        assert_eq!(p.seed.as_deref(), Some("abc"));

        let a = args(&["-q", "seed=abc", "-s", "42", "-r", "-4"]);
        let p = a.params();
        assert_eq!(p.seed.as_deref(), Some("42"));
        assert_eq!(p.rows, 10);
    }

    #[test]
    fn count_requires_print_path() {
        assert!(Args::try_parse_from([PKG_NAME, "--count", "3"]).is_err());
        assert_eq!(args(&["-p", "--count", "3"]).count, 3);
    }

    #[test]
    fn game_options_disable_resume() {
        assert!(!args(&[]).has_game_options());
        assert!(args(&["-s", "1"]).has_game_options());
    }

    #[test]
    fn explicit_data_dir() {
        let a = args(&["--data-dir", "/tmp/ftp"]);
        assert_eq!(a.data_dir(), Some(PathBuf::from("/tmp/ftp")));
    }
}
