use flashgen::*;

fn card(term: &str, definition: &str) -> Flashcard {
    Flashcard {
        term: term.to_string(),
        definition: definition.to_string(),
    }
}

#[test]
fn test_empty_input_yields_no_cards() {
    assert!(parse_flashcards("").is_empty());
}

#[test]
fn test_two_simple_lines() {
    let cards = parse_flashcards("A: B\nC: D");
    assert_eq!(cards, vec![card("A", "B"), card("C", "D")]);
}

#[test]
fn test_line_without_colon_is_dropped() {
    assert!(parse_flashcards("NoColonHere").is_empty());
}

#[test]
fn test_empty_definition_is_dropped() {
    assert!(parse_flashcards("Empty:").is_empty());
    assert!(parse_flashcards("Empty:    ").is_empty());
}

#[test]
fn test_empty_term_is_dropped() {
    assert!(parse_flashcards(": orphan definition").is_empty());
    assert!(parse_flashcards("   : orphan definition").is_empty());
}

#[test]
fn test_later_colons_stay_in_definition() {
    let cards = parse_flashcards("Term: part1: part2");
    assert_eq!(cards, vec![card("Term", "part1: part2")]);

    let cards = parse_flashcards("Ratio: 3:4");
    assert_eq!(cards, vec![card("Ratio", "3:4")]);
}

#[test]
fn test_whitespace_is_trimmed_on_both_sides() {
    let cards = parse_flashcards("  Spaced  :  value  ");
    assert_eq!(cards, vec![card("Spaced", "value")]);
}

#[test]
fn test_noise_lines_are_skipped() {
    let raw = "Here are your flashcards!\n\
               \n\
               Photosynthesis: Converting light into chemical energy\n\
               ---\n\
               Mitochondria: Powerhouse of the cell\n\
               Hope this helps.";
    let cards = parse_flashcards(raw);
    assert_eq!(
        cards,
        vec![
            card("Photosynthesis", "Converting light into chemical energy"),
            card("Mitochondria", "Powerhouse of the cell"),
        ]
    );
}

#[test]
fn test_crlf_line_endings() {
    let cards = parse_flashcards("A: B\r\nC: D\r\n");
    assert_eq!(cards, vec![card("A", "B"), card("C", "D")]);
}

#[test]
fn test_duplicates_are_kept_in_order() {
    let cards = parse_flashcards("X: 1\nY: 2\nX: 1");
    assert_eq!(cards, vec![card("X", "1"), card("Y", "2"), card("X", "1")]);
}

#[test]
fn test_output_follows_line_order() {
    let cards = parse_flashcards("Zeta: last letter\nAlpha: first letter\nMu: middle");
    let terms: Vec<_> = cards.iter().map(|c| c.term.as_str()).collect();
    assert_eq!(terms, ["Zeta", "Alpha", "Mu"]);
}

#[test]
fn test_parsing_twice_gives_same_result() {
    let raw = "A: B\nnoise\nC: D: E\n";
    assert_eq!(parse_flashcards(raw), parse_flashcards(raw));
}

#[test]
fn test_flashcard_set_parse_wraps_parser() {
    let set = FlashcardSet::parse("A: B\nnope\nC: D");
    assert_eq!(set.len(), 2);
    assert!(!set.is_empty());
    assert_eq!(set.cards()[1], card("C", "D"));

    assert!(FlashcardSet::parse("only noise").is_empty());
}
