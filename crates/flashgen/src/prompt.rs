//! Prompt templates sent to the generation service.

use reqwest::Url;

const LINE_FORMAT: &str = "Put each flashcard on its own line in the form \
term: definition, using a single colon between the term and its definition. \
Do not number the lines or add any other text.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// The input is a link whose page should be summarized
    Url,
    /// The input is a topic name or a block of text
    Topic,
}

/// Decide whether `topic` was pasted as a link.
///
/// Parsing as a URL is not enough on its own: the input must also literally
/// start with `http://` or `https://`.
pub fn classify(topic: &str) -> PromptKind {
    if is_url(topic) {
        PromptKind::Url
    } else {
        PromptKind::Topic
    }
}

pub fn is_url(topic: &str) -> bool {
    (topic.starts_with("http://") || topic.starts_with("https://")) && Url::parse(topic).is_ok()
}

/// Build the request text for `topic`. Expects an already trimmed, non-empty input.
pub fn build_prompt(topic: &str) -> String {
    match classify(topic) {
        PromptKind::Url => format!(
            "Summarize the content found at {topic} into a set of study flashcards. \
             {LINE_FORMAT}"
        ),
        PromptKind::Topic => format!(
            "Create a set of study flashcards summarizing the following topic or text. \
             {LINE_FORMAT}\n\n{topic}"
        ),
    }
}
