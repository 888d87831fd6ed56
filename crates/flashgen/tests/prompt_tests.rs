use flashgen::*;

#[test]
fn test_classify_url_inputs() {
    assert_eq!(classify("https://example.com/page"), PromptKind::Url);
    assert_eq!(classify("http://example.com"), PromptKind::Url);
    assert_eq!(
        classify("https://en.wikipedia.org/wiki/Roman_Empire?x=1#History"),
        PromptKind::Url
    );
}

#[test]
fn test_classify_topic_inputs() {
    assert_eq!(classify("Roman history"), PromptKind::Topic);
    // Looks like a scheme but is not one
    assert_eq!(classify("httpsomething"), PromptKind::Topic);
    // Parses as a URL but the scheme is not http(s)
    assert_eq!(classify("ftp://example.com/file"), PromptKind::Topic);
    assert_eq!(classify("mailto:someone@example.com"), PromptKind::Topic);
    // Has the prefix but is not a valid URL
    assert_eq!(classify("http://"), PromptKind::Topic);
    assert_eq!(classify("https://exa mple.com"), PromptKind::Topic);
}

#[test]
fn test_url_prompt_mentions_link_and_format() {
    let prompt = build_prompt("https://example.com/page");
    assert!(prompt.contains("https://example.com/page"));
    assert!(prompt.starts_with("Summarize the content found at"));
    assert!(prompt.contains("term: definition"));
}

#[test]
fn test_topic_prompt_embeds_text_and_format() {
    let prompt = build_prompt("Roman history");
    assert!(prompt.starts_with("Create a set of study flashcards"));
    assert!(prompt.ends_with("Roman history"));
    assert!(prompt.contains("term: definition"));
}

#[test]
fn test_prompt_is_deterministic() {
    assert_eq!(build_prompt("Cells"), build_prompt("Cells"));
}
