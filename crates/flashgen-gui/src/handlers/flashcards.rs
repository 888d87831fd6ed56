use flashgen::{FlashcardSet, GeminiClient, GeneratorOptions};
use flashgen_async_runtime::FlashcardUpdate;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub async fn handle_generate(
    topic: String,
    options: GeneratorOptions,
    update_tx: &mpsc::UnboundedSender<FlashcardUpdate>,
) {
    let result = match GeminiClient::new(&options) {
        Ok(client) => flashgen::generate_flashcards(&client, &options, &topic).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(cards) => {
            let _ = update_tx.send(FlashcardUpdate::Generated { cards });
        }
        Err(e) => {
            log::warn!("Generation failed: {e}");
            let _ = update_tx.send(FlashcardUpdate::GenerationFailed {
                message: e.to_string(),
            });
        }
    }
}

pub async fn handle_import(path: PathBuf, update_tx: &mpsc::UnboundedSender<FlashcardUpdate>) {
    match flashgen::import_text(&path).await {
        Ok(text) => {
            let _ = update_tx.send(FlashcardUpdate::TextImported { path, text });
        }
        Err(e) => {
            let _ = update_tx.send(FlashcardUpdate::Error {
                message: format!("Failed to read file: {e}"),
            });
        }
    }
}

pub async fn handle_export(
    cards: FlashcardSet,
    output_path: PathBuf,
    update_tx: &mpsc::UnboundedSender<FlashcardUpdate>,
) {
    match flashgen::export_csv(&cards, &output_path).await {
        Ok(()) => {
            let _ = update_tx.send(FlashcardUpdate::ExportComplete {
                path: output_path,
                card_count: cards.len(),
            });
        }
        Err(e) => {
            let _ = update_tx.send(FlashcardUpdate::Error {
                message: format!("Failed to export CSV: {e}"),
            });
        }
    }
}
