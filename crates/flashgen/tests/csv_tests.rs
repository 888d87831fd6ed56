use flashgen::*;

fn set(pairs: &[(&str, &str)]) -> FlashcardSet {
    pairs
        .iter()
        .map(|(t, d)| Flashcard {
            term: t.to_string(),
            definition: d.to_string(),
        })
        .collect::<Vec<_>>()
        .into()
}

#[test]
fn test_header_and_plain_rows() {
    let csv = to_csv(&set(&[("A", "B"), ("C", "D")])).unwrap();
    assert_eq!(csv, "Term,Definition\nA,B\nC,D");
}

#[test]
fn test_empty_set_is_header_only() {
    let csv = to_csv(&FlashcardSet::new()).unwrap();
    assert_eq!(csv, "Term,Definition");
}

#[test]
fn test_comma_and_quotes_are_escaped() {
    let csv = to_csv(&set(&[("Greeting", r#"He said, "hi""#)])).unwrap();
    assert_eq!(csv, "Term,Definition\nGreeting,\"He said, \"\"hi\"\"\"");
}

#[test]
fn test_newline_in_field_is_quoted() {
    let csv = to_csv(&set(&[("Poem", "line one\nline two")])).unwrap();
    assert_eq!(csv, "Term,Definition\nPoem,\"line one\nline two\"");
}

#[test]
fn test_rows_keep_set_order() {
    let csv = to_csv(&set(&[("Z", "1"), ("A", "2"), ("M", "3")])).unwrap();
    let terms: Vec<_> = csv
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(terms, ["Z", "A", "M"]);
}

#[tokio::test]
async fn test_export_then_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.csv");
    let original = set(&[("Comma", "a, b"), ("Quote", r#"say "x""#), ("Plain", "text")]);

    export_csv(&original, &path).await.unwrap();

    let written = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(written.starts_with("Term,Definition\n"));
    assert!(!written.ends_with('\n'));

    let loaded = load_from_csv(&path).await.unwrap();
    assert_eq!(loaded, original);
}

#[tokio::test]
async fn test_load_skips_incomplete_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.csv");
    tokio::fs::write(&path, "Term,Definition\nA,B\nlonely\n,no term\nC,D")
        .await
        .unwrap();

    let loaded = load_from_csv(&path).await.unwrap();
    assert_eq!(loaded, set(&[("A", "B"), ("C", "D")]));
}

#[tokio::test]
async fn test_import_text_is_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let contents = "  The French Revolution\nbegan in 1789.\n\n";
    tokio::fs::write(&path, contents).await.unwrap();

    let text = import_text(&path).await.unwrap();
    assert_eq!(text, contents);
}

#[tokio::test]
async fn test_import_missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = import_text(dir.path().join("missing.txt")).await;
    match result {
        Err(FlashcardError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected Io error, got {other:?}"),
    }
}
