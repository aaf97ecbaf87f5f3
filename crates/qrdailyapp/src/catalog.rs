//! # Puzzle Catalog
//!
//! A fixed, ordered, non-empty list of puzzles. The tracker only ever stores an
//! ever-growing index; the catalog maps it to a puzzle with `index % len`, so
//! the index never needs to wrap and the catalog can grow without migrations.
//!
//! The built-in catalog ships with the binary. A custom catalog can be loaded
//! from a JSON array of puzzles (see `catalog_path` in the config):
//!
//! ```json
//! [{ "question": "...", "hint": "...", "answer": "...",
//!    "explanation": "...", "category": "Logic" }]
//! ```

use crate::error::{QrDailyError, Result};
use crate::model::{Puzzle, PuzzleCategory};
use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;

static BUILTIN: Lazy<Vec<Puzzle>> = Lazy::new(|| {
    use PuzzleCategory::*;
    vec![
        Puzzle::new(
            "What has keys but can't open locks?",
            "You might find one in a concert hall.",
            "A piano",
            "A piano has musical keys, none of which open anything.",
            Riddles,
        ),
        Puzzle::new(
            "A bat and a ball cost $1.10 in total. The bat costs $1.00 more than the ball. How many cents does the ball cost?",
            "It is not 10.",
            "5",
            "If the ball is 5 cents the bat is 105 cents, and together they make 110.",
            Math,
        ),
        Puzzle::new(
            "Three boxes are labelled Apples, Oranges and Mixed, and every label is wrong. You may take one fruit from one box. Which box do you pick from to relabel all three?",
            "Start with the box whose label rules out the most.",
            "Mixed",
            "The Mixed box holds only one kind, so one fruit tells you its contents; the other two labels then follow.",
            Logic,
        ),
        Puzzle::new(
            "What comes next: 2, 6, 12, 20, 30, ?",
            "Look at the differences between terms.",
            "42",
            "The differences grow by two each time (4, 6, 8, 10, 12), so 30 + 12 = 42.",
            Patterns,
        ),
        Puzzle::new(
            "What word becomes shorter when you add two letters to it?",
            "Read the question literally.",
            "Short",
            "Add \"er\" to short and you get shorter.",
            Wordplay,
        ),
        Puzzle::new(
            "I have cities but no houses, forests but no trees, and water but no fish. What am I?",
            "You might fold me.",
            "A map",
            "A map shows cities, forests and water without containing any of them.",
            Riddles,
        ),
        Puzzle::new(
            "If 5 machines take 5 minutes to make 5 widgets, how many minutes would 100 machines take to make 100 widgets?",
            "Work out how long one machine takes for one widget.",
            "5",
            "Each machine makes one widget in 5 minutes, so 100 machines make 100 widgets in 5 minutes.",
            Math,
        ),
        Puzzle::new(
            "A man looks at a portrait and says: \"Brothers and sisters I have none, but that man's father is my father's son.\" Who is in the portrait?",
            "\"My father's son\" is someone the speaker knows well.",
            "His son",
            "My father's son is the speaker himself, so the portrait shows the speaker's son.",
            Logic,
        ),
        Puzzle::new(
            "What comes next: J, F, M, A, M, J, J, ?",
            "Think of the calendar.",
            "A",
            "These are the initials of the months; August follows July.",
            Patterns,
        ),
        Puzzle::new(
            "What five-letter word has one left when two letters are removed?",
            "The answer is a pun.",
            "Stone",
            "Remove S and T from stone and you are left with \"one\".",
            Wordplay,
        ),
        Puzzle::new(
            "A lily pad patch doubles in size every day and covers the pond on day 48. On which day did it cover half the pond?",
            "Work backwards one day.",
            "47",
            "It doubles daily, so the day before full coverage it covered half.",
            Math,
        ),
        Puzzle::new(
            "The more of this there is, the less you see. What is it?",
            "Turn the lights off.",
            "Darkness",
            "More darkness means less visibility.",
            Riddles,
        ),
    ]
});

#[derive(Debug, Clone)]
pub struct PuzzleCatalog {
    puzzles: Vec<Puzzle>,
}

impl Default for PuzzleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PuzzleCatalog {
    pub fn builtin() -> Self {
        Self {
            puzzles: BUILTIN.clone(),
        }
    }

    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self> {
        if puzzles.is_empty() {
            return Err(QrDailyError::Catalog(
                "A puzzle catalog needs at least one puzzle".to_string(),
            ));
        }
        Ok(Self { puzzles })
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let puzzles: Vec<Puzzle> = serde_json::from_str(raw)
            .map_err(|e| QrDailyError::Catalog(format!("Invalid catalog JSON: {}", e)))?;
        Self::new(puzzles)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref()).map_err(QrDailyError::Io)?;
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// The puzzle selected by a (possibly very large) persisted index.
    pub fn get(&self, index: u64) -> &Puzzle {
        let slot = (index % self.puzzles.len() as u64) as usize;
        &self.puzzles[slot]
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_non_empty_and_covers_every_category() {
        let catalog = PuzzleCatalog::builtin();
        assert!(!catalog.is_empty());
        for category in PuzzleCategory::all() {
            assert!(
                catalog.puzzles().iter().any(|p| p.category == *category),
                "no puzzle in {}",
                category
            );
        }
    }

    #[test]
    fn index_wraps_at_read_time() {
        let catalog = PuzzleCatalog::builtin();
        let len = catalog.len() as u64;
        assert_eq!(catalog.get(0), catalog.get(len));
        assert_eq!(catalog.get(3), catalog.get(3 + 5 * len));
        assert_eq!(catalog.get(u64::MAX), catalog.get(u64::MAX % len));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(
            PuzzleCatalog::new(vec![]),
            Err(QrDailyError::Catalog(_))
        ));
        assert!(matches!(
            PuzzleCatalog::from_json("[]"),
            Err(QrDailyError::Catalog(_))
        ));
    }

    #[test]
    fn loads_custom_catalog_from_json() {
        let raw = r#"[{"question":"1+1?","hint":"count","answer":"2","explanation":"one and one","category":"Math"}]"#;
        let catalog = PuzzleCatalog::from_json(raw).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(41).answer, "2");
    }

    #[test]
    fn bad_json_is_a_catalog_error() {
        assert!(matches!(
            PuzzleCatalog::from_json("{"),
            Err(QrDailyError::Catalog(_))
        ));
    }
}
