pub mod flashcards;

pub use flashcards::{FlashcardState, show_flashcards};
