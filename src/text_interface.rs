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
use super::interface::{self, Interface, Status};
use super::game::Outcome;
use super::clock;
use std::io::{self, BufRead, Write};

const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";
const REVEALED_COLOR: &str = "\x1b[31m";
const DEFAULT_COLOR: &str = "\x1b[0m";

/// Line-based interface that works on any terminal that understands
/// ANSI escape sequences.
pub struct TextInterface<R, W> {
    input: R,
    output: W,
}

pub fn render<W: Write>(
    output: &mut W,
    letters: &LetterGrid,
    mask: &MaskGrid,
) -> io::Result<()> {
    writeln!(output)?;

    for (letter_row, mask_row) in letters.rows().zip(mask.rows()) {
        for (&letter, &mask) in letter_row.iter().zip(mask_row.iter()) {
            if mask == MaskState::Revealed {
                write!(
                    output,
                    "{} {} {}",
                    REVEALED_COLOR,
                    letter,
                    DEFAULT_COLOR,
                )?;
            } else {
                write!(output, " {} ", letter)?;
            }
        }

        writeln!(output)?;
    }

    writeln!(output)
}

impl<R: BufRead, W: Write> TextInterface<R, W> {
    pub fn new(input: R, output: W) -> TextInterface<R, W> {
        TextInterface { input, output }
    }
}

impl<R: BufRead, W: Write> Interface for TextInterface<R, W> {
    fn show(
        &mut self,
        letters: &LetterGrid,
        mask: &MaskGrid,
        status: &Status,
    ) -> io::Result<()> {
        write!(self.output, "{}", CLEAR_SCREEN)?;

        writeln!(self.output, "{}", status.heading())?;

        render(&mut self.output, letters, mask)?;

        write!(
            self.output,
            "{} words left.\n\
             You have {}.\n\
             Enter word: ",
            status.words_left,
            clock::format_time(status.time_left),
        )?;

        self.output.flush()
    }

    fn read_guess(&mut self) -> io::Result<Option<String>> {
        let mut guess = String::new();

        if self.input.read_line(&mut guess)? == 0 {
            return Ok(None);
        }

        if guess.ends_with('\n') {
            guess.pop();

            if guess.ends_with('\r') {
                guess.pop();
            }
        }

        interface::truncate_guess(&mut guess);

        Ok(Some(guess))
    }

    fn finish(
        &mut self,
        letters: &LetterGrid,
        mask: &MaskGrid,
        outcome: &Outcome,
    ) -> io::Result<()> {
        write!(self.output, "{}", CLEAR_SCREEN)?;
        render(&mut self.output, letters, mask)?;
        writeln!(self.output, "{}", outcome)?;
        self.output.flush()
    }
}
