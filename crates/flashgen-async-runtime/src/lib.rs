use std::path::PathBuf;

// Re-export types from library crate
pub use flashgen::{FlashcardSet, GeneratorOptions};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum FlashcardCommand {
    /// Build a prompt for `topic`, call the generator and parse the reply
    Generate {
        topic: String,
        options: GeneratorOptions,
    },
    ImportText {
        path: PathBuf,
    },
    ExportCsv {
        cards: FlashcardSet,
        output_path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum FlashcardUpdate {
    /// A fresh set that replaces whatever is displayed
    Generated {
        cards: FlashcardSet,
    },
    /// The request failed, returned nothing, or parsed to zero cards.
    /// The displayed set is cleared.
    GenerationFailed {
        message: String,
    },
    TextImported {
        path: PathBuf,
        text: String,
    },
    ExportComplete {
        path: PathBuf,
        card_count: usize,
    },
    Error {
        message: String,
    },
}

impl FlashcardUpdate {
    /// Whether this update ends an in-flight generation request.
    pub fn finishes_generation(&self) -> bool {
        matches!(
            self,
            FlashcardUpdate::Generated { .. } | FlashcardUpdate::GenerationFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_generation_outcome_finishes_generation() {
        let generated = FlashcardUpdate::Generated {
            cards: FlashcardSet::default(),
        };
        let failed = FlashcardUpdate::GenerationFailed {
            message: "quota exceeded".to_string(),
        };
        assert!(generated.finishes_generation());
        assert!(failed.finishes_generation());

        let imported = FlashcardUpdate::TextImported {
            path: PathBuf::from("notes.txt"),
            text: String::new(),
        };
        assert!(!imported.finishes_generation());
    }
}
