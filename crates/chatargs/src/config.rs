//! JSON configuration for the tokenizer and target lookup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::access::LookupOptions;
use crate::args::{Tokenizer, TokenizerOptions};
use crate::error::{ChatArgsError, Result};

pub const CONFIG_FILENAME: &str = "chatargs.json";
pub const CONFIG_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatArgsConfig {
    pub version: String,
    #[serde(default)]
    pub tokenizer: TokenizerOptions,
    #[serde(default)]
    pub lookup: LookupOptions,
}

impl Default for ChatArgsConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            tokenizer: TokenizerOptions::default(),
            lookup: LookupOptions::default(),
        }
    }
}

impl ChatArgsConfig {
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.tokenizer.clone())
    }
}

/// Load `chatargs.json` from `dir`, writing a default one first if missing.
pub fn load_or_create_config(dir: &Path) -> Result<ChatArgsConfig> {
    std::fs::create_dir_all(dir).map_err(|error| {
        ChatArgsError::Config(format!(
            "failed to create config directory {}: {error}",
            dir.display()
        ))
    })?;

    let path = config_path(dir);
    if !path.exists() {
        let config = ChatArgsConfig::default();
        write_config(&path, &config)?;
        tracing::debug!(path = %path.display(), "created default config");
        return Ok(config);
    }

    load_config(&path)
}

/// Load an explicit config file.
pub fn load_config(path: &Path) -> Result<ChatArgsConfig> {
    if !path.exists() {
        return Err(ChatArgsError::ConfigNotFound(path.to_path_buf()));
    }

    let data = std::fs::read_to_string(path)?;
    let config: ChatArgsConfig = serde_json::from_str(&data).map_err(|error| {
        ChatArgsError::Serialization(format!(
            "failed to parse config {}: {error}",
            path.display()
        ))
    })?;

    if config.version != CONFIG_VERSION {
        tracing::warn!(
            path = %path.display(),
            version = %config.version,
            "unsupported config version"
        );
        return Err(ChatArgsError::Config(format!(
            "unsupported config version {} (expected {CONFIG_VERSION})",
            config.version
        )));
    }

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

fn write_config(path: &Path, config: &ChatArgsConfig) -> Result<()> {
    let data = serde_json::to_string_pretty(config).map_err(|error| {
        ChatArgsError::Serialization(format!(
            "failed to serialize config {}: {error}",
            path.display()
        ))
    })?;
    std::fs::write(path, data)?;
    Ok(())
}
