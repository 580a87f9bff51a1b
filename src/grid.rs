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

use std::fmt;

// Value of a letter cell that hasn’t been filled yet
pub const EMPTY_LETTER: char = '\0';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskState {
    // No word covers this cell
    Empty,
    // A word covers this cell but the player hasn’t found it yet
    Used,
    // A found word covers this cell
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationError;

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "allocation error")
    }
}

impl std::error::Error for AllocationError {
}

/// A square grid of cells stored in row-major order.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    values: Box<[T]>,
    size: u32,
}

pub type LetterGrid = Grid<char>;
pub type MaskGrid = Grid<MaskState>;

impl<T: Clone> Grid<T> {
    pub fn new(size: u32, value: T) -> Result<Grid<T>, AllocationError> {
        let n_cells = (size as usize).checked_mul(size as usize)
            .ok_or(AllocationError)?;

        let mut values = Vec::new();

        values.try_reserve_exact(n_cells).map_err(|_| AllocationError)?;
        values.resize(n_cells, value);

        Ok(Grid {
            values: values.into_boxed_slice(),
            size,
        })
    }
}

impl<T> Grid<T> {
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, row: u32, col: u32) -> usize {
        assert!(self.contains(row, col));

        row as usize * self.size as usize + col as usize
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&T> {
        self.contains(row, col).then(|| &self.values[self.index(row, col)])
    }

    pub fn set(&mut self, row: u32, col: u32, value: T) {
        let index = self.index(row, col);
        self.values[index] = value;
    }

    pub fn rows(&self) -> std::slice::Chunks<T> {
        self.values.chunks(self.size.max(1) as usize)
    }

    pub fn fill_with<F>(&mut self, mut f: F)
        where F: FnMut() -> T
    {
        for value in self.values.iter_mut() {
            *value = f();
        }
    }
}

impl<T: Copy> Grid<T> {
    pub fn at(&self, row: u32, col: u32) -> T {
        self.values[self.index(row, col)]
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row_num, row) in self.rows().enumerate() {
            if row_num > 0 {
                writeln!(f)?;
            }

            for &letter in row.iter() {
                if letter == EMPTY_LETTER {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", letter)?;
                }
            }
        }

        Ok(())
    }
}
