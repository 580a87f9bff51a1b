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

use std::io::{self, BufRead, Write};

pub fn print_welcome<W: Write>(output: &mut W) -> io::Result<()> {
    write!(
        output,
        " ---------------------------- \n\
         |                            |\n\
         |   Welcome to Word Search   |\n\
         |                            |\n \
         ---------------------------- \n",
    )
}

/// Converts a 1-based option number into an index into a list of
/// `n_options` options.
pub fn resolve(number: i64, n_options: usize) -> Option<usize> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;

    (index < n_options).then_some(index)
}

/// Lists the options and asks the player to pick one of them. Returns
/// the index of the chosen option or None if the reply doesn’t name
/// one.
pub fn get_option<R, W, S>(
    input: &mut R,
    output: &mut W,
    options: &[S],
    option_name: &str,
) -> io::Result<Option<usize>>
    where R: BufRead,
          W: Write,
          S: AsRef<str>
{
    write!(output, "\nWhat {} would you like?\n\n", option_name)?;

    for (i, option) in options.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, option.as_ref())?;
    }

    write!(output, "\n{} (number 1-{}): ", option_name, options.len())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let Ok(number) = line.trim().parse::<i64>()
    else {
        return Ok(None);
    };

    Ok(resolve(number, options.len()))
}
