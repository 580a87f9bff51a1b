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

use super::grid::{AllocationError, LetterGrid, MaskGrid, MaskState};
use super::directions::{Direction, Order, Footprint};
use std::fmt;
use std::ops::Range;
use rand::Rng;

// Number of random starts to try before searching every start
const MAX_RANDOM_ATTEMPTS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    Allocation,
    NoRoom(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWord {
    pub text: String,
    pub start_row: u32,
    pub start_col: u32,
    pub length: u32,
    pub direction: Direction,
    pub order: Order,
    pub found: bool,
}

impl GeneratedWord {
    pub fn footprint(&self) -> Footprint {
        Footprint::new(
            self.start_row,
            self.start_col,
            self.length,
            self.direction,
            self.order,
        )
    }

    pub fn matches(&self, guess: &str) -> bool {
        guess.chars().flat_map(char::to_lowercase)
            .eq(self.text.chars().flat_map(char::to_lowercase))
    }
}

pub fn upper(ch: char) -> char {
    let mut upper = ch.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(upper), None) => upper,
        // Letters without a simple uppercase form are kept as they are
        _ => ch,
    }
}

// Returns the ranges of rows and columns that a word of the given
// length can start from without leaving the grid
fn start_ranges(
    grid_size: u32,
    length: u32,
    direction: Direction,
    order: Order,
) -> (Range<u32>, Range<u32>) {
    let fitting = 0..grid_size - length + 1;

    match (direction, order) {
        (Direction::Horizontal, _) => (0..grid_size, fitting),
        (Direction::Vertical, _) => (fitting, 0..grid_size),
        (Direction::Diagonal, Order::Ascending) => (fitting.clone(), fitting),
        (Direction::Diagonal, Order::Descending) => {
            (length - 1..grid_size, length - 1..grid_size)
        },
    }
}

fn is_free(mask: &MaskGrid, mut footprint: Footprint) -> bool {
    footprint.all(|(row, col)| {
        mask.get(row, col) == Some(&MaskState::Empty)
    })
}

fn free_starts<'a>(
    mask: &'a MaskGrid,
    rows: Range<u32>,
    cols: Range<u32>,
    length: u32,
    direction: Direction,
    order: Order,
) -> impl Iterator<Item = (u32, u32)> + 'a {
    rows.flat_map(move |row| cols.clone().map(move |col| (row, col)))
        .filter(move |&(row, col)| {
            is_free(mask, Footprint::new(row, col, length, direction, order))
        })
}

// Picks a random start where the word doesn’t overlap anything. Random
// starts are tried first. If none of those work then every start is
// checked and one of the free ones is picked so that a nearly full
// grid can still be filled and a full one is reported.
fn find_start<R: Rng + ?Sized>(
    mask: &MaskGrid,
    length: u32,
    direction: Direction,
    order: Order,
    rng: &mut R,
) -> Option<(u32, u32)> {
    let (rows, cols) = start_ranges(mask.size(), length, direction, order);

    for attempt in 1..=MAX_RANDOM_ATTEMPTS {
        let row = rng.gen_range(rows.clone());
        let col = rng.gen_range(cols.clone());

        if is_free(mask, Footprint::new(row, col, length, direction, order)) {
            log::debug!("found a free start after {} attempts", attempt);
            return Some((row, col));
        }
    }

    let n_free = free_starts(
        mask,
        rows.clone(),
        cols.clone(),
        length,
        direction,
        order,
    ).count();

    log::debug!(
        "no random start was free, {} free starts in the whole grid",
        n_free,
    );

    if n_free == 0 {
        return None;
    }

    free_starts(mask, rows, cols, length, direction, order)
        .nth(rng.gen_range(0..n_free))
}

/// Finds a random position where the word doesn’t overlap any other
/// word and writes it into the grid. Returns `PlaceError::NoRoom` and
/// leaves the grids untouched if there is no such position.
pub fn place<R: Rng + ?Sized>(
    word: &str,
    letters: &mut LetterGrid,
    mask: &mut MaskGrid,
    direction: Direction,
    order: Order,
    rng: &mut R,
) -> Result<GeneratedWord, PlaceError> {
    let grid_size = letters.size();
    let length = word.chars().count() as u32;

    assert!(length >= 1 && length <= grid_size);
    assert_eq!(mask.size(), grid_size);

    let mut text = String::new();
    text.try_reserve_exact(word.len()).map_err(|_| AllocationError)?;
    text.push_str(word);

    let Some((start_row, start_col)) =
        find_start(mask, length, direction, order, rng)
    else {
        return Err(PlaceError::NoRoom(text));
    };

    log::debug!(
        "placed “{}” {:?} {:?} at {},{}",
        word,
        direction,
        order,
        start_row,
        start_col,
    );

    let generated_word = GeneratedWord {
        text,
        start_row,
        start_col,
        length,
        direction,
        order,
        found: false,
    };

    for ((row, col), ch) in generated_word.footprint().zip(word.chars()) {
        letters.set(row, col, upper(ch));
        mask.set(row, col, MaskState::Used);
    }

    Ok(generated_word)
}

impl From<AllocationError> for PlaceError {
    fn from(_: AllocationError) -> PlaceError {
        PlaceError::Allocation
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlaceError::Allocation => write!(f, "allocation error"),
            PlaceError::NoRoom(word) => {
                write!(f, "there is no room in the grid for “{}”", word)
            },
        }
    }
}

impl std::error::Error for PlaceError {
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::grid::{Grid, EMPTY_LETTER};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const ALL_DIRECTIONS: [(Direction, Order); 4] = [
        (Direction::Horizontal, Order::Ascending),
        (Direction::Vertical, Order::Ascending),
        (Direction::Diagonal, Order::Ascending),
        (Direction::Diagonal, Order::Descending),
    ];

    fn make_grids(size: u32) -> (LetterGrid, MaskGrid) {
        (
            Grid::new(size, EMPTY_LETTER).unwrap(),
            Grid::new(size, MaskState::Empty).unwrap(),
        )
    }

    fn read_word(letters: &LetterGrid, word: &GeneratedWord) -> String {
        word.footprint().map(|(row, col)| letters.at(row, col)).collect()
    }

    #[test]
    fn ranges() {
        assert_eq!(
            start_ranges(10, 4, Direction::Horizontal, Order::Ascending),
            (0..10, 0..7),
        );
        assert_eq!(
            start_ranges(10, 4, Direction::Vertical, Order::Descending),
            (0..7, 0..10),
        );
        assert_eq!(
            start_ranges(10, 4, Direction::Diagonal, Order::Ascending),
            (0..7, 0..7),
        );
        assert_eq!(
            start_ranges(10, 4, Direction::Diagonal, Order::Descending),
            (3..10, 3..10),
        );
        assert_eq!(
            start_ranges(4, 4, Direction::Diagonal, Order::Descending),
            (3..4, 3..4),
        );
    }

    #[test]
    fn place_all_directions() {
        let mut rng = StdRng::seed_from_u64(1);

        for (direction, order) in ALL_DIRECTIONS {
            let (mut letters, mut mask) = make_grids(8);

            let word = place(
                "zebra",
                &mut letters,
                &mut mask,
                direction,
                order,
                &mut rng,
            ).unwrap();

            assert_eq!(&word.text, "zebra");
            assert_eq!(word.length, 5);
            assert_eq!(word.direction, direction);
            assert_eq!(word.order, order);
            assert!(!word.found);

            assert_eq!(&read_word(&letters, &word), "ZEBRA");

            for (row, col) in word.footprint() {
                assert!(letters.contains(row, col));
                assert_eq!(mask.at(row, col), MaskState::Used);
            }

            let n_used = mask.rows()
                .flatten()
                .filter(|&&m| m == MaskState::Used)
                .count();
            assert_eq!(n_used, 5);
        }
    }

    #[test]
    fn whole_grid() {
        let mut rng = StdRng::seed_from_u64(2);

        for (direction, order) in ALL_DIRECTIONS {
            let (mut letters, mut mask) = make_grids(4);

            let word = place(
                "lion",
                &mut letters,
                &mut mask,
                direction,
                order,
                &mut rng,
            ).unwrap();

            assert_eq!(&read_word(&letters, &word), "LION");

            match (direction, order) {
                (Direction::Horizontal, _) => assert_eq!(word.start_col, 0),
                (Direction::Vertical, _) => assert_eq!(word.start_row, 0),
                (Direction::Diagonal, Order::Ascending) => {
                    assert_eq!((word.start_row, word.start_col), (0, 0));
                },
                (Direction::Diagonal, Order::Descending) => {
                    assert_eq!((word.start_row, word.start_col), (3, 3));
                },
            }
        }
    }

    #[test]
    fn avoid_used_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let (mut letters, mut mask) = make_grids(3);

        // Leave only the bottom row free
        for row in 0..2 {
            for col in 0..3 {
                mask.set(row, col, MaskState::Used);
            }
        }

        let word = place(
            "cow",
            &mut letters,
            &mut mask,
            Direction::Horizontal,
            Order::Ascending,
            &mut rng,
        ).unwrap();

        assert_eq!((word.start_row, word.start_col), (2, 0));
        assert_eq!(&letters.to_string(), "...\n...\nCOW");
    }

    #[test]
    fn last_free_start() {
        let mut rng = StdRng::seed_from_u64(6);
        let (mut letters, mut mask) = make_grids(20);

        // Leave a single gap that is just big enough for the word
        mask.fill_with(|| MaskState::Used);
        for col in 4..9 {
            mask.set(13, col, MaskState::Empty);
        }

        let word = place(
            "horse",
            &mut letters,
            &mut mask,
            Direction::Horizontal,
            Order::Ascending,
            &mut rng,
        ).unwrap();

        assert_eq!((word.start_row, word.start_col), (13, 4));
        assert_eq!(&read_word(&letters, &word), "HORSE");
        assert!(mask.rows().flatten().all(|&m| m == MaskState::Used));
    }

    #[test]
    fn no_room() {
        let mut rng = StdRng::seed_from_u64(7);

        for (direction, order) in ALL_DIRECTIONS {
            let (mut letters, mut mask) = make_grids(6);

            // Every row, column and diagonal has a used cell in the
            // middle so nothing six letters long fits
            for i in 0..6 {
                mask.set(i, (i + 3) % 6, MaskState::Used);
            }
            mask.set(2, 2, MaskState::Used);

            let before = mask.rows().flatten().copied().collect::<Vec<_>>();

            assert_eq!(
                place(
                    "donkey",
                    &mut letters,
                    &mut mask,
                    direction,
                    order,
                    &mut rng,
                ),
                Err(PlaceError::NoRoom("donkey".to_string())),
            );

            // A failed placement doesn’t touch the grids
            assert_eq!(
                mask.rows().flatten().copied().collect::<Vec<_>>(),
                before,
            );
            assert_eq!(&letters.to_string(), &"......\n".repeat(6)[..41]);
        }

        assert_eq!(
            PlaceError::NoRoom("donkey".to_string()).to_string(),
            "there is no room in the grid for “donkey”",
        );
    }

    #[test]
    fn no_overlaps() {
        let mut rng = StdRng::seed_from_u64(4);
        let (mut letters, mut mask) = make_grids(8);
        let mut words = Vec::new();

        for (i, text) in ["ant", "bee", "cat", "dog", "eel", "fox"]
            .into_iter()
            .enumerate()
        {
            let (direction, order) = ALL_DIRECTIONS[i % ALL_DIRECTIONS.len()];

            words.push(place(
                text,
                &mut letters,
                &mut mask,
                direction,
                order,
                &mut rng,
            ).unwrap());
        }

        let mut cells = std::collections::HashSet::new();

        for word in words.iter() {
            assert_eq!(read_word(&letters, word), word.text.to_uppercase());

            for cell in word.footprint() {
                assert!(cells.insert(cell));
            }
        }
    }

    #[test]
    fn matches() {
        let mut rng = StdRng::seed_from_u64(5);
        let (mut letters, mut mask) = make_grids(5);

        let word = place(
            "dog",
            &mut letters,
            &mut mask,
            Direction::Vertical,
            Order::Ascending,
            &mut rng,
        ).unwrap();

        assert!(word.matches("dog"));
        assert!(word.matches("DOG"));
        assert!(word.matches("Dog"));
        assert!(!word.matches("do"));
        assert!(!word.matches("dogs"));
        assert!(!word.matches(" dog"));
    }

    #[test]
    fn uppercase() {
        assert_eq!(upper('a'), 'A');
        assert_eq!(upper('Z'), 'Z');
        assert_eq!(upper('ŝ'), 'Ŝ');
        // ‘ß’ becomes “SS” so it is left alone
        assert_eq!(upper('ß'), 'ß');
    }
}
