use crate::client::Generator;
use crate::options::GeneratorOptions;
use crate::prompt::build_prompt;
use crate::types::{FlashcardError, FlashcardSet, Result};

/// Run one generation: prompt, call the service once, parse the reply.
///
/// An absent or blank reply is reported as [`FlashcardError::EmptyResponse`],
/// while a reply with no parseable lines is [`FlashcardError::NoValidFlashcards`].
pub async fn generate_flashcards(
    generator: &dyn Generator,
    options: &GeneratorOptions,
    topic: &str,
) -> Result<FlashcardSet> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(FlashcardError::EmptyInput);
    }

    let prompt = build_prompt(topic);
    log::info!("Requesting flashcards from {}", options.model);

    let response = generator.generate(&options.model, &prompt).await?;
    let Some(text) = response.text() else {
        log::warn!("Generation returned no text");
        return Err(FlashcardError::EmptyResponse);
    };

    let set = FlashcardSet::parse(text);
    if set.is_empty() {
        log::warn!("No flashcards could be parsed from a {} byte reply", text.len());
        return Err(FlashcardError::NoValidFlashcards);
    }

    log::info!("Parsed {} flashcards", set.len());
    Ok(set)
}
