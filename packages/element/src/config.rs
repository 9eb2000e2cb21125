use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use custom_editor_dom::tags;

pub const DEFAULT_CONFIG_NAME: &str = "custom-editor.config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tag name must not be empty")]
    EmptyTagName,

    #[error("Block tag '{0}' is not a block-level element")]
    InvalidBlockTag(String),
}

/// Element configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementConfig {
    /// Custom element name registered with the host runtime
    #[serde(default = "default_tag_name")]
    pub tag_name: String,

    /// Block the engine creates for new lines
    #[serde(default = "default_block_tag")]
    pub block_tag: String,

    /// History depth for engines that keep their own undo stack
    #[serde(default = "default_undo_levels")]
    pub undo_levels: usize,

    /// `state` attribute value that selects editing mode
    #[serde(default = "default_editing_state")]
    pub editing_state: String,
}

fn default_tag_name() -> String {
    "custom-editor".to_string()
}

fn default_block_tag() -> String {
    "p".to_string()
}

fn default_undo_levels() -> usize {
    100
}

fn default_editing_state() -> String {
    "editing".to_string()
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            tag_name: default_tag_name(),
            block_tag: default_block_tag(),
            undo_levels: default_undo_levels(),
            editing_state: default_editing_state(),
        }
    }
}

impl ElementConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ElementConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tag_name.trim().is_empty() {
            return Err(ConfigError::EmptyTagName);
        }
        if !tags::is_block(&self.block_tag) || tags::is_container(&self.block_tag) {
            return Err(ConfigError::InvalidBlockTag(self.block_tag.clone()));
        }
        Ok(())
    }
}
