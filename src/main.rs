// Word Search – A timed word game
// Copyright (C) 2026  The Word Search authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

mod grid;
mod directions;
mod difficulty;
mod categories;
mod placer;
mod generator;
mod clock;
mod interface;
mod game;
mod options;
mod text_interface;
mod curses_interface;

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use categories::Category;
use clock::Clock;
use difficulty::{Level, LEVELS};
use generator::Puzzle;
use placer::PlaceError;
use game::Game;
use text_interface::TextInterface;
use curses_interface::CursesInterface;

#[derive(Parser)]
#[command(name = "word-search")]
struct Cli {
    #[arg(short, long, value_name = "NUMBER")]
    category: Option<i64>,
    #[arg(short, long, value_name = "NUMBER")]
    difficulty: Option<i64>,
    #[arg(short, long, value_name = "FILE")]
    word_list: Option<OsString>,
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,
    #[arg(short, long)]
    plain: bool,
}

fn load_categories(cli: &Cli) -> Result<Vec<Category>, ()> {
    let Some(ref filename) = cli.word_list
    else {
        return Ok(categories::builtin());
    };

    match categories::load(filename) {
        Ok(categories) => {
            log::info!(
                "loaded {} categories from {}",
                categories.len(),
                filename.to_string_lossy(),
            );
            Ok(categories)
        },
        Err(e) => {
            eprintln!("{}: {}", filename.to_string_lossy(), e);
            Err(())
        },
    }
}

fn choose<R, S>(
    input: &mut R,
    given: Option<i64>,
    options: &[S],
    option_name: &str,
) -> io::Result<Option<usize>>
    where R: BufRead,
          S: AsRef<str>
{
    match given {
        Some(number) => Ok(options::resolve(number, options.len())),
        None => {
            let mut output = io::stdout();
            options::get_option(input, &mut output, options, option_name)
        },
    }
}

fn random_seed(cli: &Cli) -> u64 {
    cli.seed.unwrap_or_else(|| {
        let seed = chrono::Utc::now().timestamp_millis() as u64;
        log::debug!("using seed {}", seed);
        seed
    })
}

fn run_game(
    mut game: Game,
    input: io::StdinLock<'static>,
    plain: bool,
) -> io::Result<game::Outcome> {
    if plain {
        let mut interface = TextInterface::new(input, io::stdout());
        game::play(&mut game, &mut interface, &clock::SystemClock)
    } else {
        // ncurses reads the terminal directly
        drop(input);

        let mut interface = CursesInterface::new();
        game::play(&mut game, &mut interface, &clock::SystemClock)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    gettextrs::setlocale(gettextrs::LocaleCategory::LcAll, "");

    let cli = Cli::parse();

    let Ok(categories) = load_categories(&cli)
    else {
        return ExitCode::FAILURE;
    };

    let mut input = io::stdin().lock();

    if cli.category.is_none() || cli.difficulty.is_none() {
        let mut output = io::stdout();

        if let Err(e) = options::print_welcome(&mut output)
            .and_then(|_| output.flush())
        {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let category_names = categories.iter()
        .map(|category| category.name.as_str())
        .collect::<Vec<_>>();

    let category = match choose(
        &mut input,
        cli.category,
        &category_names,
        "category",
    ) {
        Ok(Some(category)) => &categories[category],
        Ok(None) => {
            eprintln!("Unknown category.");
            return ExitCode::FAILURE;
        },
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let level_names = LEVELS.iter()
        .map(|&level| level.name())
        .collect::<Vec<_>>();

    let level: Level = match choose(
        &mut input,
        cli.difficulty,
        &level_names,
        "difficulty",
    ) {
        Ok(Some(level)) => LEVELS[level],
        Ok(None) => {
            eprintln!("Unknown difficulty.");
            return ExitCode::FAILURE;
        },
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let difficulty = level.difficulty();
    let mut rng = StdRng::seed_from_u64(random_seed(&cli));

    let puzzle = match Puzzle::generate(category, &difficulty, &mut rng) {
        Ok(puzzle) => puzzle,
        Err(PlaceError::Allocation) => {
            eprintln!("Allocation error.");
            return ExitCode::FAILURE;
        },
        Err(e @ PlaceError::NoRoom(_)) => {
            eprintln!("{}: {}", category.name, e);
            return ExitCode::FAILURE;
        },
    };

    log::info!(
        "starting {} game in category “{}”",
        level.name(),
        category.name,
    );

    let game = Game::new(
        &category.name,
        puzzle,
        difficulty.time_limit,
        clock::SystemClock.now(),
    );

    match run_game(game, input, cli.plain) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}
