// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-modify-write access to the JSON settings file.

use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{ConfigError, OttoResult};

/// Settings the user can edit from the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    OpenAiApiKey,
    SheetWebhookUrl,
}

impl SettingKey {
    /// Key in the settings file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAiApiKey => "openai_api_key",
            Self::SheetWebhookUrl => "sheet_webhook_url",
        }
    }

    /// Environment variable that overrides the stored value.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::OpenAiApiKey => "OPENAI_API_KEY",
            Self::SheetWebhookUrl => "GOOGLE_SHEET_WEBHOOK_URL",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The settings file as a JSON object. Keys otto does not know about are
/// kept as they are.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current contents; a missing file reads as an empty object.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file exists but cannot be read,
    /// and `ConfigError::ParseError` if it is not a JSON object.
    pub fn read(&self) -> OttoResult<Map<String, Value>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(ConfigError::ReadError {
                    path: self.path.display().to_string(),
                    source,
                }
                .into());
            }
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(self.parse_error("expected a JSON object")),
            Err(err) => Err(self.parse_error(err.to_string())),
        }
    }

    /// Set `key` to `value` and rewrite the file, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the existing file cannot be read or the new
    /// contents cannot be written.
    pub fn update(&self, key: SettingKey, value: &str) -> OttoResult<()> {
        let mut settings = self.read()?;
        settings.insert(key.as_str().to_string(), Value::String(value.to_string()));

        let write_error = |source| ConfigError::WriteError {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let mut content = serde_json::to_string_pretty(&Value::Object(settings))
            .map_err(|err| self.parse_error(err.to_string()))?;
        content.push('\n');
        std::fs::write(&self.path, content).map_err(write_error)?;

        info!(key = %key, path = %self.path.display(), "setting saved");
        Ok(())
    }

    fn parse_error(&self, message: impl Into<String>) -> crate::error::OttoError {
        ConfigError::ParseError {
            path: self.path.display().to_string(),
            message: message.into(),
        }
        .into()
    }
}
