use crate::types::{Flashcard, FlashcardError, FlashcardSet, Result};
use std::path::Path;

const HEADER: [&str; 2] = ["Term", "Definition"];

/// Serialize a set as `Term,Definition` CSV.
///
/// Fields containing a comma, a double quote or a newline are quoted with inner
/// quotes doubled. Rows are joined with `\n` and there is no trailing newline.
pub fn to_csv(set: &FlashcardSet) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for card in set {
        writer.write_record([card.term.as_str(), card.definition.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FlashcardError::Io(e.into_error()))?;
    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

pub async fn export_csv(set: &FlashcardSet, output_path: impl AsRef<Path>) -> Result<()> {
    let set = set.clone();
    let output_path = output_path.as_ref().to_owned();

    let text = tokio::task::spawn_blocking(move || to_csv(&set)).await??;

    tokio::fs::write(&output_path, text).await?;
    log::info!("Exported flashcards to {}", output_path.display());

    Ok(())
}

/// Read a previously exported CSV back into a set.
///
/// The first row is treated as the header. Rows that do not form a valid card
/// are skipped.
pub async fn load_from_csv(path: impl AsRef<Path>) -> Result<FlashcardSet> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let cards = tokio::task::spawn_blocking(move || {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(contents.as_bytes());
        let mut cards = Vec::new();

        for result in reader.records() {
            let record = result?;
            if record.len() >= 2 {
                if let Some(card) = Flashcard::new(&record[0], &record[1]) {
                    cards.push(card);
                }
            }
        }
        Ok::<_, FlashcardError>(cards)
    })
    .await??;

    Ok(FlashcardSet::from(cards))
}
