use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.x.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "grok-2-latest";
pub const DEFAULT_MAX_TOKENS: u32 = 200;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("generator API key is missing; set it in the config file or LOST_EXPLORER_API_KEY")]
    MissingApiKey,
    #[error("config file is not valid JSON: {0}")]
    Invalid(String),
}

/// Everything the generator client needs, passed in explicitly at
/// construction. There is no process-wide credential state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GeneratorConfig {
    /// A config is usable once it carries a key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

fn config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lost_explorer");
    fs::create_dir_all(&path).ok();
    path.push("config.json");
    path
}

/// Loads the generator config from the platform config dir, falling
/// back to defaults, then lets the environment override the key.
pub fn load_config() -> Result<GeneratorConfig, ConfigError> {
    let path = config_path();
    let mut config = match fs::read_to_string(path) {
        Ok(text) => {
            serde_json::from_str(&text).map_err(|e| ConfigError::Invalid(e.to_string()))?
        }
        Err(_) => GeneratorConfig::default(),
    };

    if let Ok(key) = std::env::var("LOST_EXPLORER_API_KEY") {
        if !key.trim().is_empty() {
            config.api_key = key;
        }
    }

    Ok(config)
}
