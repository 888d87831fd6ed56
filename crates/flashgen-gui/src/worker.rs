use flashgen_async_runtime::{FlashcardCommand, FlashcardUpdate};
use tokio::sync::mpsc;

use crate::handlers;

/// Async worker task that processes flashcard commands one at a time and sends updates
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<FlashcardCommand>,
    update_tx: mpsc::UnboundedSender<FlashcardUpdate>,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &update_tx).await;
    }
    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(cmd: FlashcardCommand, update_tx: &mpsc::UnboundedSender<FlashcardUpdate>) {
    match cmd {
        FlashcardCommand::Generate { topic, options } => {
            handlers::flashcards::handle_generate(topic, options, update_tx).await;
        }
        FlashcardCommand::ImportText { path } => {
            handlers::flashcards::handle_import(path, update_tx).await;
        }
        FlashcardCommand::ExportCsv { cards, output_path } => {
            handlers::flashcards::handle_export(cards, output_path, update_tx).await;
        }
    }
}
