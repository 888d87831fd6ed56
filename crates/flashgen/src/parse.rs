//! Recover `term: definition` pairs from a free-text model reply.

use crate::types::Flashcard;

/// Parse every line of `raw` that looks like `term: definition`.
///
/// Only the first colon separates term from definition; any later colons stay
/// inside the definition. Lines without a colon, with an empty term, or with an
/// empty definition are skipped. Output keeps line order and duplicates.
pub fn parse_flashcards(raw: &str) -> Vec<Flashcard> {
    raw.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Flashcard> {
    let (term, definition) = line.split_once(':')?;
    Flashcard::new(term, definition)
}
