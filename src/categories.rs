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
use std::io;
use std::path::Path;
use std::collections::HashSet;
use serde::Deserialize;
use super::difficulty;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
    NoCategories,
    EmptyName,
    EmptyWord(String),
    BadCharacter(String, char),
    WordTooLong(String, String),
    NotEnoughWords(String, usize),
}

const BUILTIN_CATEGORIES: [(&str, [&str; 20]); 5] = [
    (
        "Animals",
        [
            "dog", "cat", "camel", "crab", "cow", "donkey", "duck", "dolphin",
            "frog", "fox", "fish", "giraffe", "gorilla", "kangaroo", "lion",
            "monkey", "mouse", "shark", "sheep", "zebra",
        ],
    ),
    (
        "Furniture",
        [
            "chair", "bench", "bed", "table", "desk", "bookcase", "cupboard",
            "drawer", "workbench", "washstand", "dresser", "lamp", "light",
            "mirror", "nightstand", "rack", "seat", "shelf", "wardrobe",
            "bookshelf",
        ],
    ),
    (
        "Food",
        [
            "bacon", "beer", "bread", "cake", "coffee", "cookies", "eggs",
            "ham", "honey", "jerky", "milk", "pizza", "spaghetti", "toast",
            "rice", "pasta", "yogurt", "almond", "cheese", "corn",
        ],
    ),
    (
        "Sport",
        [
            "hockey", "football", "badminton", "tennis", "rugby",
            "volleyball", "basketball", "netball", "baseball", "cricket",
            "archery", "cycling", "judo", "golf", "gymnastics", "curling",
            "running", "sailing", "skiing", "rowing",
        ],
    ),
    (
        "Countries",
        [
            "angola", "algeria", "fiji", "finland", "france", "canada",
            "china", "poland", "india", "columbia", "greece", "mexico",
            "zimbabwe", "turkey", "sweden", "spain", "singapore", "peru",
            "japan", "brazil",
        ],
    ),
];

pub fn builtin() -> Vec<Category> {
    BUILTIN_CATEGORIES.iter().map(|(name, words)| {
        Category {
            name: name.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }).collect()
}

fn validate_category(category: &Category) -> Result<(), LoadError> {
    if category.name.trim().is_empty() {
        return Err(LoadError::EmptyName);
    }

    let max_length = difficulty::min_grid_size() as usize;
    let mut distinct_words = HashSet::new();

    for word in category.words.iter() {
        if word.is_empty() {
            return Err(LoadError::EmptyWord(category.name.clone()));
        }

        if let Some(ch) = word.chars().find(|&ch| {
            ch.is_whitespace() || ch.is_control()
        }) {
            return Err(LoadError::BadCharacter(category.name.clone(), ch));
        }

        if word.chars().count() > max_length {
            return Err(LoadError::WordTooLong(
                category.name.clone(),
                word.clone(),
            ));
        }

        distinct_words.insert(word.to_lowercase());
    }

    let needed = difficulty::max_word_count();

    if distinct_words.len() < needed {
        return Err(LoadError::NotEnoughWords(category.name.clone(), needed));
    }

    Ok(())
}

pub fn parse(source: &str) -> Result<Vec<Category>, LoadError> {
    let categories = serde_json::from_str::<Vec<Category>>(source)
        .map_err(LoadError::Json)?;

    if categories.is_empty() {
        return Err(LoadError::NoCategories);
    }

    for category in categories.iter() {
        validate_category(category)?;
    }

    Ok(categories)
}

pub fn load<P: AsRef<Path>>(filename: P) -> Result<Vec<Category>, LoadError> {
    let source = std::fs::read_to_string(filename).map_err(LoadError::Io)?;

    parse(&source)
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "{}", e),
            LoadError::Json(e) => write!(f, "{}", e),
            LoadError::NoCategories => write!(f, "no categories"),
            LoadError::EmptyName => write!(f, "category with empty name"),
            LoadError::EmptyWord(category) => {
                write!(f, "{}: empty word", category)
            },
            LoadError::BadCharacter(category, ch) => {
                write!(
                    f,
                    "{}: unexpected character in word: U+{:04x}",
                    category,
                    *ch as u32,
                )
            },
            LoadError::WordTooLong(category, word) => {
                write!(
                    f,
                    "{}: “{}” is longer than {} letters",
                    category,
                    word,
                    difficulty::min_grid_size(),
                )
            },
            LoadError::NotEnoughWords(category, needed) => {
                write!(
                    f,
                    "{}: category needs at least {} different words",
                    category,
                    needed,
                )
            },
        }
    }
}

impl std::error::Error for LoadError {
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::generator::Puzzle;
    use super::super::placer::PlaceError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words_json(words: &[&str]) -> String {
        words.iter()
            .map(|w| format!("\"{}\"", w))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn numbered_words(n: usize) -> Vec<String> {
        (0..n).map(|i| {
            format!(
                "word{}",
                char::from_u32('a' as u32 + i as u32).unwrap(),
            )
        }).collect()
    }

    fn category_json(name: &str, words: &[String]) -> String {
        let words = words.iter().map(String::as_str).collect::<Vec<_>>();

        format!(
            "[{{ \"name\": \"{}\", \"words\": [{}] }}]",
            name,
            words_json(&words),
        )
    }

    #[test]
    fn builtin_categories() {
        let categories = builtin();

        assert_eq!(
            &categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            &["Animals", "Furniture", "Food", "Sport", "Countries"],
        );

        for category in categories.iter() {
            assert_eq!(category.words.len(), 20);
            validate_category(category).unwrap();
        }

        assert_eq!(&categories[0].words[0], "dog");
        assert_eq!(&categories[4].words[19], "brazil");
    }

    #[test]
    fn parse_good() {
        let words = numbered_words(15);
        let categories = parse(&category_json("Letters", &words)).unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(&categories[0].name, "Letters");
        assert_eq!(&categories[0].words, &words);
    }

    #[test]
    fn no_categories() {
        assert!(matches!(parse("[]"), Err(LoadError::NoCategories)));
        assert_eq!(
            &parse("[]").unwrap_err().to_string(),
            "no categories",
        );
    }

    #[test]
    fn bad_json() {
        assert!(matches!(parse("{"), Err(LoadError::Json(_))));
        assert!(matches!(
            parse("[{ \"name\": \"x\" }]"),
            Err(LoadError::Json(_)),
        ));
    }

    #[test]
    fn empty_name() {
        let words = numbered_words(15);

        assert!(matches!(
            parse(&category_json("  ", &words)),
            Err(LoadError::EmptyName),
        ));
    }

    #[test]
    fn bad_words() {
        let mut words = numbered_words(15);
        words.push(String::new());

        assert_eq!(
            &parse(&category_json("Cats", &words)).unwrap_err().to_string(),
            "Cats: empty word",
        );

        let mut words = numbered_words(15);
        words.push("two words".to_string());

        assert_eq!(
            &parse(&category_json("Cats", &words)).unwrap_err().to_string(),
            "Cats: unexpected character in word: U+0020",
        );

        let mut words = numbered_words(15);
        words.push("abcdefghijklmnopq".to_string());

        assert_eq!(
            &parse(&category_json("Cats", &words)).unwrap_err().to_string(),
            "Cats: “abcdefghijklmnopq” is longer than 16 letters",
        );
    }

    #[test]
    fn not_enough_words() {
        let words = numbered_words(14);

        assert_eq!(
            &parse(&category_json("Few", &words)).unwrap_err().to_string(),
            "Few: category needs at least 15 different words",
        );

        // Words that only differ by case count once
        let mut words = numbered_words(14);
        words.push("WORDA".to_string());

        assert!(matches!(
            parse(&category_json("Few", &words)),
            Err(LoadError::NotEnoughWords(_, 15)),
        ));
    }

    #[test]
    fn longest_words_on_every_level() {
        // The hardest category the loader accepts has the fewest words
        // allowed, all as long as possible
        let words = ('a'..='z')
            .take(difficulty::max_word_count())
            .map(|ch| {
                ch.to_string().repeat(difficulty::min_grid_size() as usize)
            })
            .collect::<Vec<_>>();

        let categories = parse(&category_json("Long", &words)).unwrap();
        let category = &categories[0];

        for level in difficulty::LEVELS {
            let difficulty = level.difficulty();

            for seed in 0..5 {
                let mut rng = StdRng::seed_from_u64(seed);

                // Generation always ends, either with a puzzle or with
                // an error naming the word that didn’t fit
                match Puzzle::generate(category, &difficulty, &mut rng) {
                    Ok(puzzle) => {
                        assert_eq!(puzzle.words.len(), difficulty.word_count);
                    },
                    Err(PlaceError::NoRoom(word)) => {
                        assert!(words.contains(&word));
                    },
                    Err(e) => panic!("unexpected error: {}", e),
                }
            }
        }
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            load("/nonexistent/word-search/categories.json"),
            Err(LoadError::Io(_)),
        ));
    }
}
