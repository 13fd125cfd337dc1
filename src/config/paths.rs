// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings file location.
//!
//! ```text
//! --config FILE / OTTO_CONFIG   (explicit)
//!          |  none
//!          v
//! <config_dir>/otto/config.json
//!   Linux    ~/.config/otto/config.json
//!   macOS    ~/Library/Application Support/otto/config.json
//!   Windows  %APPDATA%\otto\config.json
//! ```

use std::path::{Path, PathBuf};

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "OTTO_CONFIG";

const APP_DIR: &str = "otto";
const SETTINGS_FILE: &str = "config.json";

/// Per-user settings file, `None` if the platform has no config directory.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

/// The explicit path if given, else the per-user default.
#[must_use]
pub fn resolve_settings_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(default_settings_path)
}
