/*
console.rs

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

//! Terminal front end.
//!
//! Renders the game as a text grid after each change, and translates the lines typed by the
//! player into session operations.

use log::debug;
use std::io::{self, BufRead, Write};

use crate::game::{GameView, Outcome};
use crate::generator::cell::{Cell, Direction};
use crate::session::Session;

/// Help text.
pub const HELP: &str = "\
Commands:
  <column> <row>   play the cell
  w, a, s, d       play the cell above, left, below, or right of the last revealed cell
  1..9, 0          play a cell of the top row (first move only)
  h                use a hint
  r                retry after a failure
  n                new game
  p                show the hidden path (debug)
  win              win immediately (debug)
  ?                show this help
  q                quit";

/// Player commands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Play(usize, usize),
    Step(Direction),
    Top(usize),
    Hint,
    Retry,
    New,
    ShowPath,
    AutoWin,
    Help,
    Quit,
}

/// Parse a line typed by the player.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [x, y] => Some(Command::Play(x.parse().ok()?, y.parse().ok()?)),
        [token] => match token.to_lowercase().as_str() {
            "w" | "i" => Some(Command::Step(Direction::Up)),
            "a" | "j" => Some(Command::Step(Direction::Left)),
            "s" | "k" => Some(Command::Step(Direction::Down)),
            "d" | "l" => Some(Command::Step(Direction::Right)),
            "h" | "hint" => Some(Command::Hint),
            "r" | "retry" => Some(Command::Retry),
            "n" | "new" => Some(Command::New),
            "p" | "path" => Some(Command::ShowPath),
            "win" => Some(Command::AutoWin),
            "?" | "help" => Some(Command::Help),
            "q" | "quit" | "exit" => Some(Command::Quit),
            // Digit keys, with 0 standing for the tenth column
            digit if digit.len() == 1 => match digit.parse::<usize>().ok()? {
                0 => Some(Command::Top(9)),
                d => Some(Command::Top(d - 1)),
            },
            _ => None,
        },
        _ => None,
    }
}

/// Render the game as text.
///
/// `#` revealed cell, `+` playable cell, `X` wrong guess, `*` winning cell, `.` unknown cell.
pub fn render(view: &GameView) -> String {
    let mut out: String = String::new();
    out.push_str(&format!(
        "Attempt {}  Hints {}/{}  Seed {}\n",
        view.attempt, view.current_hints, view.hints, view.seed
    ));

    out.push_str("   ");
    for x in 0..view.columns {
        out.push_str(&format!("{:>2}", x % 100));
    }
    out.push_str("\n   ");
    out.push_str(&"=".repeat(view.columns * 2));
    out.push('\n');

    for y in 0..view.rows {
        out.push_str(&format!("{:>2} ", y % 100));
        for x in 0..view.columns {
            out.push(' ');
            out.push(cell_char(view, Cell::new(x, y)));
        }
        out.push('\n');
    }
    out.push_str("   ");
    out.push_str(&"=".repeat(view.columns * 2));
    out.push('\n');

    match view.outcome {
        Some(Outcome::Won(_)) => out.push_str("You found the path!\n"),
        Some(Outcome::Failed(c)) => out.push_str(&format!("Wrong cell {c}. Type r to retry.\n")),
        None => (),
    }
    out
}

fn cell_char(view: &GameView, cell: Cell) -> char {
    match view.outcome {
        Some(Outcome::Failed(c)) if c == cell => 'X',
        Some(Outcome::Won(c)) if c == cell => '*',
        _ if view.revealed.contains(&cell) => '#',
        None if view.frontier.contains(&cell) => '+',
        _ => '.',
    }
}

/// Read commands from the standard input until the player quits.
pub fn run(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line: String = line?;
        match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(command) => apply(session, command, &mut stdout)?,
            None if line.trim().is_empty() => (),
            None => writeln!(stdout, "Unknown command. Type ? for help.")?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}

fn apply(session: &mut Session, command: Command, out: &mut impl Write) -> io::Result<()> {
    debug!("Command {command:?}");
    let changed: bool = match command {
        Command::Play(x, y) => session.play(x, y),
        Command::Step(d) => session.step(d),
        Command::Top(column) => session.play_top(column),
        Command::Hint => session.play_hint(),
        Command::Retry => session.retry(),
        Command::New => match session.new_game(None) {
            Ok(()) => true,
            Err(e) => {
                writeln!(out, "{e}")?;
                false
            }
        },
        Command::ShowPath => {
            match session.show_path() {
                Some(grid) => writeln!(out, "{grid}")?,
                None => writeln!(out, "Debug tools are disabled.")?,
            }
            true
        }
        Command::AutoWin => {
            if !session.debug_tools() {
                writeln!(out, "Debug tools are disabled.")?;
            }
            session.auto_win()
        }
        Command::Help => {
            writeln!(out, "{HELP}")?;
            true
        }
        Command::Quit => true,
    };
    if !changed {
        writeln!(out, "Nothing happened.")?;
    }
    Ok(())
}
