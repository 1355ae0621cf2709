use crate::errors::EditorResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_NAME: &str = "stylesync.config.json";

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Editor configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Quiet interval before an edit is committed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Offer the "download as file" action
    #[serde(default = "default_true")]
    pub show_save_button: bool,

    /// Offer the "copy to clipboard" action
    #[serde(default = "default_true")]
    pub show_copy_button: bool,

    /// Title of the parser active at mount (raw-object mode if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_parser: Option<String>,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_true() -> bool {
    true
}

impl EditorConfig {
    /// Load config from a directory, falling back to defaults
    pub fn load(dir: &Path) -> EditorResult<Self> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: EditorConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(EditorConfig::default())
        }
    }

    /// Write config into a directory, returning the file path
    pub fn save(&self, dir: &Path) -> EditorResult<PathBuf> {
        let config_path = dir.join(DEFAULT_CONFIG_NAME);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_default_parser(mut self, title: impl Into<String>) -> Self {
        self.default_parser = Some(title.into());
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            show_save_button: true,
            show_copy_button: true,
            default_parser: None,
        }
    }
}
