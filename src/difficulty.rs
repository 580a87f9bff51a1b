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

use chrono::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

// The levels in the order they are offered to the player
pub const LEVELS: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Difficulty {
    pub grid_size: u32,
    pub word_count: usize,
    pub time_limit: Duration,
}

impl Level {
    pub fn name(self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
        }
    }

    pub fn difficulty(self) -> Difficulty {
        let (grid_size, word_count, minutes) = match self {
            Level::Easy => (16, 5, 10),
            Level::Medium => (20, 10, 5),
            Level::Hard => (24, 15, 2),
        };

        Difficulty {
            grid_size,
            word_count,
            time_limit: Duration::seconds(minutes * 60),
        }
    }
}

// The smallest grid of any level. Every word has to fit in it.
pub fn min_grid_size() -> u32 {
    LEVELS.iter().map(|level| level.difficulty().grid_size).min().unwrap_or(0)
}

// The largest number of words that any level places
pub fn max_word_count() -> usize {
    LEVELS.iter().map(|level| level.difficulty().word_count).max().unwrap_or(0)
}
