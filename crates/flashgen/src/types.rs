use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("Please enter a topic, some text, or a URL")]
    EmptyInput,
    #[error("{0}")]
    Generation(String),
    #[error("Failed to generate flashcards: the model returned no text")]
    EmptyResponse,
    #[error("No valid flashcards found. Check that the response uses 'term: definition' lines")]
    NoValidFlashcards,
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, FlashcardError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
}

impl Flashcard {
    /// Build a card from raw parts, trimming both sides.
    ///
    /// Returns `None` when either side is empty after trimming.
    pub fn new(term: &str, definition: &str) -> Option<Self> {
        let term = term.trim();
        let definition = definition.trim();
        if term.is_empty() || definition.is_empty() {
            return None;
        }
        Some(Self {
            term: term.to_string(),
            definition: definition.to_string(),
        })
    }
}

/// Ordered flashcards derived from a single generation response.
///
/// Insertion order is display order and export order. A new set replaces the
/// previous one wholesale; sets are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardSet {
    cards: Vec<Flashcard>,
}

impl FlashcardSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw model reply into a set, dropping lines that are not cards.
    pub fn parse(raw: &str) -> Self {
        Self {
            cards: crate::parse::parse_flashcards(raw),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flashcard> {
        self.cards.iter()
    }
}

impl From<Vec<Flashcard>> for FlashcardSet {
    fn from(cards: Vec<Flashcard>) -> Self {
        Self { cards }
    }
}

impl IntoIterator for FlashcardSet {
    type Item = Flashcard;
    type IntoIter = std::vec::IntoIter<Flashcard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlashcardSet {
    type Item = &'a Flashcard;
    type IntoIter = std::slice::Iter<'a, Flashcard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
