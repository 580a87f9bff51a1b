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

use super::grid::{LetterGrid, MaskGrid, MaskState};
use super::generator::Puzzle;
use super::placer::GeneratedWord;
use super::clock::{self, Clock};
use super::interface::{Interface, Status};
use chrono::{DateTime, Duration, Utc};
use std::{fmt, io};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Playing,
    Won,
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guess {
    Found(usize),
    AlreadyFound,
    NotInList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won {
        n_words: usize,
        elapsed: Duration,
    },
    TimedOut {
        n_found: usize,
        n_words: usize,
    },
}

pub struct Game {
    category: String,
    puzzle: Puzzle,
    n_found: usize,
    time_limit: Duration,
    start: DateTime<Utc>,
}

impl Game {
    pub fn new(
        category: &str,
        puzzle: Puzzle,
        time_limit: Duration,
        start: DateTime<Utc>,
    ) -> Game {
        let n_found = puzzle.words.iter().filter(|w| w.found).count();

        Game {
            category: category.to_string(),
            puzzle,
            n_found,
            time_limit,
            start,
        }
    }

    pub fn letters(&self) -> &LetterGrid {
        &self.puzzle.letters
    }

    pub fn mask(&self) -> &MaskGrid {
        &self.puzzle.mask
    }

    pub fn words(&self) -> &[GeneratedWord] {
        &self.puzzle.words
    }

    pub fn n_found(&self) -> usize {
        self.n_found
    }

    pub fn n_words(&self) -> usize {
        self.puzzle.words.len()
    }

    // Time since the start of the game, rounded down to whole seconds
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        Duration::seconds((now - self.start).num_seconds().max(0))
    }

    pub fn time_left(&self, now: DateTime<Utc>) -> Duration {
        self.time_limit - self.elapsed(now)
    }

    pub fn state(&self, now: DateTime<Utc>) -> State {
        if self.elapsed(now) >= self.time_limit {
            State::TimedOut
        } else if self.n_found >= self.n_words() {
            State::Won
        } else {
            State::Playing
        }
    }

    pub fn guess(&mut self, guess: &str) -> Guess {
        let guess = guess.trim_end_matches(['\n', '\r']);

        let Some(word_num) = self.puzzle.words.iter()
            .position(|word| word.matches(guess))
        else {
            return Guess::NotInList;
        };

        let word = &mut self.puzzle.words[word_num];

        if std::mem::replace(&mut word.found, true) {
            return Guess::AlreadyFound;
        }

        for (row, col) in word.footprint() {
            self.puzzle.mask.set(row, col, MaskState::Revealed);
        }

        self.n_found += 1;

        log::debug!(
            "found “{}” ({}/{})",
            self.puzzle.words[word_num].text,
            self.n_found,
            self.n_words(),
        );

        Guess::Found(word_num)
    }

    fn outcome(&self, state: State, now: DateTime<Utc>) -> Option<Outcome> {
        match state {
            State::Playing => None,
            State::Won => Some(Outcome::Won {
                n_words: self.n_words(),
                elapsed: self.elapsed(now),
            }),
            State::TimedOut => Some(Outcome::TimedOut {
                n_found: self.n_found,
                n_words: self.n_words(),
            }),
        }
    }
}

/// Runs the game until either all of the words are found or the time
/// runs out. The time is only checked between guesses so the game can
/// overrun the limit while the player is typing.
pub fn play<I, C>(
    game: &mut Game,
    interface: &mut I,
    clock: &C,
) -> io::Result<Outcome>
    where I: Interface + ?Sized,
          C: Clock + ?Sized,
{
    let mut first_turn = true;

    loop {
        let now = clock.now();
        let state = game.state(now);

        if let Some(outcome) = game.outcome(state, now) {
            log::info!("game over: {:?}", outcome);

            for word in game.words().iter().filter(|word| !word.found) {
                log::debug!("missed “{}”", word.text);
            }

            interface.finish(game.letters(), game.mask(), &outcome)?;
            break Ok(outcome);
        }

        let status = Status {
            category: &game.category,
            n_words: game.n_words(),
            words_left: game.n_words() - game.n_found(),
            time_left: game.time_left(now),
            first_turn,
        };

        interface.show(game.letters(), game.mask(), &status)?;
        first_turn = false;

        let Some(guess) = interface.read_guess()?
        else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the end of the game",
            ));
        };

        game.guess(&guess);
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Won { n_words, elapsed } => {
                write!(
                    f,
                    "Congratulations, found all {} words in {}",
                    n_words,
                    clock::format_time(*elapsed),
                )
            },
            Outcome::TimedOut { n_found, n_words } => {
                write!(
                    f,
                    "Time is up, found {} of {} words",
                    n_found,
                    n_words,
                )
            },
        }
    }
}
