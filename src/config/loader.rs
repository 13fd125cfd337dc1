// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_json_file_optional()
//!   .add_json_str()
//!   .with_process_env() | .with_env(lookup)
//!   .set()
//!        |
//!        v
//!    build() --> Config
//! ```

use std::path::{Path, PathBuf};

use super::{Config, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
use crate::error::Result;

/// Environment variable → config key.
pub const ENV_KEYS: [(&str, &str); 4] = [
    ("OPENAI_API_KEY", "openai_api_key"),
    ("OTTO_OPENAI_MODEL", "openai_model"),
    ("OTTO_OPENAI_BASE_URL", "openai_base_url"),
    ("GOOGLE_SHEET_WEBHOOK_URL", "sheet_webhook_url"),
];

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env: Vec<(&'static str, String)>,
    files: Vec<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Adds a JSON settings file. A missing file is skipped; a malformed one
    /// makes `build()` fail.
    #[must_use]
    pub fn add_json_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Json).required(false));
        if p.exists() {
            self.files.push(p.to_path_buf());
        }
        self
    }

    #[must_use]
    pub fn add_json_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Json));
        self
    }

    /// Read the mapped variables from the process environment.
    #[must_use]
    pub fn with_process_env(self) -> Self {
        self.with_env(|name| std::env::var(name).ok())
    }

    /// Read the mapped variables through `lookup`. Empty values count as
    /// unset.
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.env = ENV_KEYS
            .iter()
            .filter_map(|(var, key)| {
                lookup(var)
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
                    .map(|value| (*key, value))
            })
            .collect();
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A settings file has invalid JSON syntax.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        let mut builder = self
            .builder
            .set_default("openai_model", DEFAULT_OPENAI_MODEL)?
            .set_default("openai_base_url", DEFAULT_OPENAI_BASE_URL)?;
        for (key, value) in self.env {
            builder = builder.set_override(key, value)?;
        }
        let cfg = builder.build()?;
        let mut config: Config = cfg.try_deserialize()?;
        config.normalize();
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Blank strings in the settings file mean "not set".
    fn normalize(&mut self) {
        for slot in [&mut self.openai_api_key, &mut self.sheet_webhook_url] {
            if slot.as_deref().is_some_and(|value| value.trim().is_empty()) {
                *slot = None;
            }
        }
        if self.openai_model.trim().is_empty() {
            DEFAULT_OPENAI_MODEL.clone_into(&mut self.openai_model);
        }
        let base = self.openai_base_url.trim().trim_end_matches('/');
        self.openai_base_url = if base.is_empty() {
            DEFAULT_OPENAI_BASE_URL.to_string()
        } else {
            base.to_string()
        };
    }
}
