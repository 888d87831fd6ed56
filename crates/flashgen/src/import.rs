use crate::types::Result;
use std::path::Path;

/// Read a text file whose full contents become the next topic input.
///
/// Nothing is parsed or trimmed at import time.
pub async fn import_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path).await?;
    log::info!("Imported {} bytes from {}", text.len(), path.display());
    Ok(text)
}
