//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// YouTube caption and catalog settings
    #[serde(default)]
    pub youtube: YouTubeSettings,

    /// Text-generation model settings
    #[serde(default)]
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YouTubeSettings {
    /// YouTube Data API key
    #[serde(default)]
    pub api_key: String,

    /// YouTube Data API base URL
    #[serde(default = "default_data_api_endpoint")]
    pub api_endpoint: String,

    /// Timed-text caption endpoint
    #[serde(default = "default_caption_endpoint")]
    pub caption_endpoint: String,

    /// Caption language to request
    #[serde(default = "default_caption_language")]
    pub caption_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (huggingface)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API token (for hosted providers)
    #[serde(default)]
    pub api_token: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (for custom/self-hosted deployments)
    #[serde(default)]
    pub endpoint: String,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_api_endpoint() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_caption_endpoint() -> String {
    "https://www.youtube.com/api/timedtext".to_string()
}

fn default_caption_language() -> String {
    "en".to_string()
}

fn default_llm_provider() -> String {
    "huggingface".to_string()
}

fn default_llm_model() -> String {
    "gpt2".to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for YouTubeSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_endpoint: default_data_api_endpoint(),
            caption_endpoint: default_caption_endpoint(),
            caption_language: default_caption_language(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_token: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            youtube: YouTubeSettings::default(),
            llm: LlmSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.youtube.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("VIDGUIDE_YOUTUBE_API_KEY") {
                if !key.trim().is_empty() {
                    self.youtube.api_key = key;
                }
            }
        }

        if self.llm.api_token.trim().is_empty() {
            if let Ok(token) = std::env::var("VIDGUIDE_HF_API_TOKEN") {
                if !token.trim().is_empty() {
                    self.llm.api_token = token;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "vidguide", "vidguide")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_huggingface_provider() {
        let settings = Settings::default();
        assert_eq!(settings.llm.provider, "huggingface");
    }

    #[test]
    fn default_caption_language_is_english() {
        let settings = Settings::default();
        assert_eq!(settings.youtube.caption_language, "en");
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.youtube.api_endpoint, settings.youtube.api_endpoint);
        assert_eq!(parsed.llm.model, settings.llm.model);
    }
}
