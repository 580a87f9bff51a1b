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

use super::grid::{LetterGrid, MaskGrid};
use super::game::Outcome;
use super::clock;
use chrono::Duration;
use std::io;

// Maximum number of characters accepted for one guess
pub const MAX_GUESS_LENGTH: usize = 255;

pub struct Status<'a> {
    pub category: &'a str,
    pub n_words: usize,
    pub words_left: usize,
    pub time_left: Duration,
    // Set the first time the grid is shown
    pub first_turn: bool,
}

impl<'a> Status<'a> {
    /// Text to show above the grid. The first turn gets a longer
    /// introduction.
    pub fn heading(&self) -> String {
        if self.first_turn {
            format!(
                "There are {} words from category {} hidden in this grid.\n\
                 Can you find them all?\n\
                 You have {} seconds!",
                self.n_words,
                self.category,
                clock::format_time(self.time_left),
            )
        } else {
            format!(
                "Find the {} words from the category {}.",
                self.n_words,
                self.category,
            )
        }
    }
}

/// The terminal that the game is played on.
pub trait Interface {
    fn show(
        &mut self,
        letters: &LetterGrid,
        mask: &MaskGrid,
        status: &Status,
    ) -> io::Result<()>;

    // Blocks until the player has entered a word. Returns None if
    // there is no more input.
    fn read_guess(&mut self) -> io::Result<Option<String>>;

    fn finish(
        &mut self,
        letters: &LetterGrid,
        mask: &MaskGrid,
        outcome: &Outcome,
    ) -> io::Result<()>;
}

pub fn truncate_guess(guess: &mut String) {
    if let Some((pos, _)) = guess.char_indices().nth(MAX_GUESS_LENGTH) {
        guess.truncate(pos);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn heading() {
        let mut status = Status {
            category: "Food",
            n_words: 10,
            words_left: 10,
            time_left: Duration::seconds(300),
            first_turn: true,
        };

        assert_eq!(
            status.heading(),
            "There are 10 words from category Food hidden in this grid.\n\
             Can you find them all?\n\
             You have 05:00 seconds!",
        );

        status.first_turn = false;

        assert_eq!(
            status.heading(),
            "Find the 10 words from the category Food.",
        );
    }

    #[test]
    fn truncate() {
        let mut guess = "dog".to_string();
        truncate_guess(&mut guess);
        assert_eq!(&guess, "dog");

        let mut guess = "ŝ".repeat(MAX_GUESS_LENGTH + 10);
        truncate_guess(&mut guess);
        assert_eq!(guess.chars().count(), MAX_GUESS_LENGTH);

        let mut guess = "a".repeat(MAX_GUESS_LENGTH);
        truncate_guess(&mut guess);
        assert_eq!(guess.len(), MAX_GUESS_LENGTH);
    }
}
