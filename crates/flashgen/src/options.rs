use crate::theme::KeyValueStore;
use crate::types::{FlashcardError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "FLASHGEN_MODEL";

/// Settings-store keys for the values the GUI lets the user edit
pub const MODEL_SETTING: &str = "model";
pub const API_KEY_SETTING: &str = "api_key";

/// Settings for the generation client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub model: String,
    pub api_key: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.7,
            max_output_tokens: 4096,
            timeout_secs: 60,
        }
    }
}

impl GeneratorOptions {
    /// Load options from JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| FlashcardError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| FlashcardError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Apply `GEMINI_API_KEY` and `FLASHGEN_MODEL` when they are set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(MODEL_ENV).ok(),
        )
    }

    /// Apply a model and API key previously saved with [`Self::save_to_store`].
    pub fn with_store(self, store: &dyn KeyValueStore) -> Self {
        self.with_overrides(store.get(API_KEY_SETTING), store.get(MODEL_SETTING))
    }

    pub fn save_to_store(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(MODEL_SETTING, &self.model)?;
        store.set(API_KEY_SETTING, &self.api_key)?;
        Ok(())
    }

    pub fn with_overrides(mut self, api_key: Option<String>, model: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(FlashcardError::Config(format!(
                "No API key configured (set {API_KEY_ENV} or api_key in the config file)"
            )));
        }
        if self.model.trim().is_empty() {
            return Err(FlashcardError::Config("Model name is empty".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(FlashcardError::Config("Base URL is empty".to_string()));
        }
        Ok(())
    }
}
