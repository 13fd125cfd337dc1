// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for otto.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. settings file  <config_dir>/otto/config.json  (--config / OTTO_CONFIG)
//! 3. .env in the working directory (loaded into the environment)
//! 4. environment variables
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! OPENAI_API_KEY            → openai_api_key
//! OTTO_OPENAI_MODEL         → openai_model
//! OTTO_OPENAI_BASE_URL      → openai_base_url
//! GOOGLE_SHEET_WEBHOOK_URL  → sheet_webhook_url
//! ```
//!
//! The settings flow writes through [`SettingsStore`] and then calls
//! [`Config::reload`] so the running session sees the new values.

pub mod loader;
pub mod paths;
pub mod store;


use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::ConfigLoader;
pub use store::{SettingKey, SettingsStore};

/// Model used for commit message generation unless configured.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Chat completions endpoint root.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Complete application configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key for the commit message generator. `None` disables AI messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    /// Chat model name.
    pub openai_model: String,
    /// API root, without the trailing `/chat/completions`.
    pub openai_base_url: String,
    /// Release telemetry endpoint. `None` disables telemetry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_webhook_url: Option<String>,

    /// Settings file this configuration was read from.
    #[serde(skip)]
    settings_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            sheet_webhook_url: None,
            settings_path: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("sheet_webhook_url", &self.sheet_webhook_url)
            .field("settings_path", &self.settings_path)
            .finish()
    }
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use otto_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_json_file_optional("/home/me/.config/otto/config.json")
    ///     .with_process_env()
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load defaults, the settings file (if it exists) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file is not valid JSON or a value has
    /// the wrong type.
    pub fn load(settings_path: Option<&Path>) -> Result<Self> {
        let mut loader = Self::builder();
        if let Some(path) = settings_path {
            loader = loader.add_json_file_optional(path);
        }
        let mut config = loader.with_process_env().build()?;
        config.settings_path = settings_path.map(Path::to_path_buf);
        Ok(config)
    }

    /// Re-run [`Config::load`] with the same settings file.
    ///
    /// # Errors
    ///
    /// See [`Config::load`]. On error `self` is left unchanged.
    pub fn reload(&mut self) -> Result<()> {
        *self = Self::load(self.settings_path.as_deref())?;
        Ok(())
    }

    #[must_use]
    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    /// Store for the settings file, if one is configured.
    #[must_use]
    pub fn settings_store(&self) -> Option<SettingsStore> {
        self.settings_path.clone().map(SettingsStore::new)
    }

    #[must_use]
    pub fn has_ai(&self) -> bool {
        self.openai_api_key.is_some()
    }

    #[must_use]
    pub fn has_telemetry(&self) -> bool {
        self.sheet_webhook_url.is_some()
    }

    /// Current value of a user-editable setting.
    #[must_use]
    pub fn get(&self, key: SettingKey) -> Option<&str> {
        match key {
            SettingKey::OpenAiApiKey => self.openai_api_key.as_deref(),
            SettingKey::SheetWebhookUrl => self.sheet_webhook_url.as_deref(),
        }
    }
}

/// `sk-...abcd` style: first 3 and last 4 characters, or "Not Set".
#[must_use]
pub fn mask_key(key: Option<&str>) -> String {
    let Some(key) = key.filter(|k| !k.is_empty()) else {
        return "Not Set".to_string();
    };
    let chars: Vec<char> = key.chars().collect();
    let head: String = chars.iter().take(3).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}...{tail}")
}

/// First 20 characters followed by `...`, or "Not Set".
#[must_use]
pub fn mask_url(url: Option<&str>) -> String {
    match url.filter(|u| !u.is_empty()) {
        Some(url) => format!("{}...", url.chars().take(20).collect::<String>()),
        None => "Not Set".to_string(),
    }
}
