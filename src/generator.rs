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

use super::grid::{Grid, LetterGrid, MaskGrid, MaskState, EMPTY_LETTER};
use super::directions::{Direction, Order};
use super::placer::{self, GeneratedWord, PlaceError};
use super::categories::Category;
use super::difficulty::Difficulty;
use rand::Rng;

const N_LETTERS: u8 = b'Z' - b'A' + 1;

// Number of times to start a puzzle again if a word doesn’t fit
const MAX_GENERATE_ATTEMPTS: u32 = 10;

pub struct Puzzle {
    pub letters: LetterGrid,
    pub mask: MaskGrid,
    pub words: Vec<GeneratedWord>,
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    (b'A' + rng.gen_range(0..N_LETTERS)) as char
}

// The first 40% of the words are horizontal, the next 40% are
// vertical and the rest are diagonal in either order.
fn choose_direction<R: Rng + ?Sized>(
    word_num: usize,
    word_count: usize,
    rng: &mut R,
) -> (Direction, Order) {
    if word_num * 5 < word_count * 2 {
        (Direction::Horizontal, Order::Ascending)
    } else if word_num * 5 < word_count * 4 {
        (Direction::Vertical, Order::Ascending)
    } else if rng.gen::<bool>() {
        (Direction::Diagonal, Order::Descending)
    } else {
        (Direction::Diagonal, Order::Ascending)
    }
}

// Picks a random word from the category that hasn’t been used yet. The
// search starts at a random position and scans forward. If it reaches
// the end of the list without finding anything it starts again from a
// new random position.
fn choose_word<'a, R: Rng + ?Sized>(
    category: &'a Category,
    chosen: &[GeneratedWord],
    rng: &mut R,
) -> &'a str {
    loop {
        let start = rng.gen_range(0..category.words.len());

        if let Some(word) = category.words[start..].iter().find(|word| {
            !chosen.iter().any(|generated| generated.matches(word))
        }) {
            break word.as_str();
        }
    }
}

pub fn generate<R: Rng + ?Sized>(
    letters: &mut LetterGrid,
    mask: &mut MaskGrid,
    category: &Category,
    difficulty: &Difficulty,
    rng: &mut R,
) -> Result<Vec<GeneratedWord>, PlaceError> {
    assert!(category.words.len() >= difficulty.word_count);

    letters.fill_with(|| random_letter(rng));
    mask.fill_with(|| MaskState::Empty);

    let mut words = Vec::new();

    words.try_reserve_exact(difficulty.word_count)
        .map_err(|_| PlaceError::Allocation)?;

    for word_num in 0..difficulty.word_count {
        let word = choose_word(category, &words, rng);

        let (direction, order) =
            choose_direction(word_num, difficulty.word_count, rng);

        let word = placer::place(
            word,
            letters,
            mask,
            direction,
            order,
            rng,
        )?;

        words.push(word);
    }

    Ok(words)
}

impl Puzzle {
    pub fn generate<R: Rng + ?Sized>(
        category: &Category,
        difficulty: &Difficulty,
        rng: &mut R,
    ) -> Result<Puzzle, PlaceError> {
        let mut letters = Grid::new(difficulty.grid_size, EMPTY_LETTER)?;
        let mut mask = Grid::new(difficulty.grid_size, MaskState::Empty)?;
        let mut attempt = 1;

        let words = loop {
            let result = generate(
                &mut letters,
                &mut mask,
                category,
                difficulty,
                rng,
            );

            match result {
                Err(PlaceError::NoRoom(word))
                    if attempt < MAX_GENERATE_ATTEMPTS =>
                {
                    log::warn!("no room for “{}”, starting again", word);
                    attempt += 1;
                },
                result => break result?,
            }
        };

        log::info!(
            "generated {}×{} puzzle with {} words from “{}”",
            difficulty.grid_size,
            difficulty.grid_size,
            words.len(),
            category.name,
        );
        log::debug!("letters:\n{}", letters);

        Ok(Puzzle { letters, mask, words })
    }
}
