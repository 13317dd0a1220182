/*
main.rs

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

use log::{error, info};
use std::process::ExitCode;

use find_the_path::cli_options;
use find_the_path::config::VERSION;
use find_the_path::console;
use find_the_path::saver::game::SaverGame;
use find_the_path::session::Session;

fn main() -> ExitCode {
    let args = match cli_options::parse() {
        Ok(args) => args,
        Err(ret) => return ExitCode::from(ret),
    };
    info!("Find the Path {VERSION}");

    let saver: Option<SaverGame> = args.data_dir().map(SaverGame::new);
    let mut session: Session = Session::new(saver, args.debug_tools());
    session.subscribe(|view| print!("{}", console::render(view)));

    if let Err(e) = session.start(args.params(), !args.new && !args.has_game_options()) {
        error!("{e}");
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    println!("Type ? for help.");

    match console::run(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
