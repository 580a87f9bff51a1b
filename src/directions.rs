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

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

// Only diagonal words take the order into account. Horizontal and
// vertical words are always laid out ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    Ascending,
    Descending,
}

pub fn step(
    row: u32,
    col: u32,
    direction: Direction,
    order: Order,
) -> (u32, u32) {
    match (direction, order) {
        (Direction::Horizontal, _) => (row, col.wrapping_add(1)),
        (Direction::Vertical, _) => (row.wrapping_add(1), col),
        (Direction::Diagonal, Order::Ascending) => {
            (row.wrapping_add(1), col.wrapping_add(1))
        },
        (Direction::Diagonal, Order::Descending) => {
            (row.wrapping_sub(1), col.wrapping_sub(1))
        },
    }
}

/// Iterator over the cells covered by a word, in the order of its
/// letters.
#[derive(Clone, Debug)]
pub struct Footprint {
    row: u32,
    col: u32,
    remaining: u32,
    direction: Direction,
    order: Order,
}

impl Footprint {
    pub fn new(
        row: u32,
        col: u32,
        length: u32,
        direction: Direction,
        order: Order,
    ) -> Footprint {
        Footprint {
            row,
            col,
            remaining: length,
            direction,
            order,
        }
    }
}

impl Iterator for Footprint {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        if self.remaining == 0 {
            return None;
        }

        let pos = (self.row, self.col);

        (self.row, self.col) =
            step(self.row, self.col, self.direction, self.order);
        self.remaining -= 1;

        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for Footprint {
}
