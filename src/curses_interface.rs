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
use super::interface::{Interface, Status, MAX_GUESS_LENGTH};
use super::game::Outcome;
use super::clock;
use std::io;

const REVEALED_PAIR: i16 = 1;

const PROMPT: &str = "Enter word: ";

pub struct CursesInterface {
    has_colors: bool,
    // Row of the first line of the grid on the screen
    grid_y: i32,
    prompt_y: i32,
    closed: bool,
}

fn addch_utf8(ch: char) {
    let mut buf = [0u8; 4];

    ncurses::addstr(ch.encode_utf8(&mut buf));
}

impl CursesInterface {
    pub fn new() -> CursesInterface {
        ncurses::initscr();
        ncurses::cbreak();
        ncurses::noecho();
        ncurses::keypad(ncurses::stdscr(), true);

        let has_colors = ncurses::has_colors();

        if has_colors {
            ncurses::start_color();
            ncurses::init_pair(
                REVEALED_PAIR,
                ncurses::COLOR_RED,
                ncurses::COLOR_BLACK,
            );
        }

        CursesInterface {
            has_colors,
            grid_y: 0,
            prompt_y: 0,
            closed: false,
        }
    }

    fn draw_grid(&self, letters: &LetterGrid, mask: &MaskGrid) {
        for row in 0..letters.size() {
            ncurses::mv(self.grid_y + row as i32, 0);

            for col in 0..letters.size() {
                let letter = letters.at(row, col);
                let revealed = mask.at(row, col) == MaskState::Revealed;

                if revealed {
                    if self.has_colors {
                        ncurses::attron(ncurses::COLOR_PAIR(REVEALED_PAIR));
                    }
                    ncurses::attron(ncurses::A_BOLD());
                }

                ncurses::addch(' ' as u32);
                addch_utf8(letter);
                ncurses::addch(' ' as u32);

                if revealed {
                    ncurses::attroff(ncurses::A_BOLD());
                    if self.has_colors {
                        ncurses::attroff(ncurses::COLOR_PAIR(REVEALED_PAIR));
                    }
                }
            }
        }
    }

    fn draw_guess(&self, guess: &str) {
        ncurses::mv(self.prompt_y, 0);
        ncurses::clrtoeol();
        ncurses::addstr(PROMPT);
        ncurses::addstr(guess);
        ncurses::refresh();
    }

    fn close(&mut self) {
        if !self.closed {
            ncurses::endwin();
            self.closed = true;
        }
    }
}

impl Interface for CursesInterface {
    fn show(
        &mut self,
        letters: &LetterGrid,
        mask: &MaskGrid,
        status: &Status,
    ) -> io::Result<()> {
        ncurses::clear();

        let heading = status.heading();
        let mut y = 0;

        for line in heading.lines() {
            ncurses::mvaddstr(y, 0, line);
            y += 1;
        }

        self.grid_y = y + 1;
        self.draw_grid(letters, mask);

        let y = self.grid_y + letters.size() as i32 + 1;

        ncurses::mvaddstr(
            y,
            0,
            &format!("{} words left.", status.words_left),
        );
        ncurses::mvaddstr(
            y + 1,
            0,
            &format!("You have {}.", clock::format_time(status.time_left)),
        );

        self.prompt_y = y + 2;
        self.draw_guess("");

        Ok(())
    }

    fn read_guess(&mut self) -> io::Result<Option<String>> {
        let mut guess = String::new();

        loop {
            let Some(key) = ncurses::get_wch()
            else {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    "error reading from the terminal",
                ));
            };

            match key {
                ncurses::WchResult::Char(ch) => match char::from_u32(ch) {
                    Some('\n') | Some('\r') => break,
                    Some('\x08') | Some('\x7f') => {
                        guess.pop();
                    },
                    // Ctrl+U
                    Some('\x15') => guess.clear(),
                    Some(ch) if !ch.is_control() => {
                        if guess.chars().count() < MAX_GUESS_LENGTH {
                            guess.push(ch);
                        }
                    },
                    _ => (),
                },
                ncurses::WchResult::KeyCode(ncurses::KEY_BACKSPACE) => {
                    guess.pop();
                },
                ncurses::WchResult::KeyCode(ncurses::KEY_ENTER) => break,
                ncurses::WchResult::KeyCode(_) => (),
            }

            self.draw_guess(&guess);
        }

        Ok(Some(guess))
    }

    fn finish(
        &mut self,
        letters: &LetterGrid,
        mask: &MaskGrid,
        outcome: &Outcome,
    ) -> io::Result<()> {
        ncurses::clear();

        self.grid_y = 0;
        self.draw_grid(letters, mask);

        let y = letters.size() as i32 + 1;

        ncurses::mvaddstr(y, 0, &outcome.to_string());
        ncurses::mvaddstr(y + 2, 0, "Press any key to exit.");
        ncurses::refresh();

        ncurses::getch();

        self.close();

        // Repeat the result on the normal terminal so that it stays
        // visible after the screen is restored
        println!("{}", outcome);

        Ok(())
    }
}

impl Drop for CursesInterface {
    fn drop(&mut self) {
        self.close();
    }
}
