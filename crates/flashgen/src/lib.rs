pub mod client;
mod csv;
mod generate;
mod import;
mod options;
mod parse;
mod prompt;
pub mod theme;
mod types;

pub use self::csv::{export_csv, load_from_csv, to_csv};
pub use client::{GeminiClient, GenerationResponse, Generator};
pub use generate::generate_flashcards;
pub use import::import_text;
pub use options::*;
pub use parse::parse_flashcards;
pub use prompt::{PromptKind, build_prompt, classify, is_url};
pub use theme::{KeyValueStore, Theme};
pub use types::*;
