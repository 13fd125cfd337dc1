// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings menu and first-run setup.
//!
//! ```text
//! input --> SettingsStore::update (merge by key, rewrite file)
//!       --> Config::reload        (env still wins)
//!       --> Session::refresh_services
//! ```

use tracing::info;

use super::{Outcome, Session};
use crate::config::paths::CONFIG_ENV;
use crate::config::{SettingKey, mask_key, mask_url};
use crate::error::Result;
use crate::prompt::{Choice, InputRequest, Validator, choose};
use crate::ui;

/// Prefix OpenAI secret keys start with.
const KEY_PREFIX: &str = "sk-";

/// Main handler for the settings command. Loops until Back or cancel.
///
/// # Errors
///
/// Returns `OttoError::Aborted` if a prompt is aborted.
pub fn run_settings_command(session: &mut Session<'_>) -> Result<()> {
    loop {
        let config = &session.config;
        let entries = [
            Choice::new(Some(SettingKey::OpenAiApiKey), "🤖 OpenAI API Key")
                .hint(mask_key(config.get(SettingKey::OpenAiApiKey))),
            Choice::new(Some(SettingKey::SheetWebhookUrl), "📊 Google Sheets URL")
                .hint(mask_url(config.get(SettingKey::SheetWebhookUrl))),
            Choice::new(None, "🔙 Back"),
        ];
        let Some(Some(key)) = choose(session.prompt, "⚙️ Settings", &entries).into_result()? else {
            return Ok(());
        };

        let current = session.config.get(key).unwrap_or_default().to_string();
        let request = InputRequest::new(question(key))
            .initial(&current)
            .validate(validator(key));
        let Some(value) = session.prompt.input(&request).into_result()? else {
            continue;
        };
        warn_on_unusual(key, &value);
        if save_setting(session, key, &value) {
            ui::success(match key {
                SettingKey::OpenAiApiKey => "OpenAI API Key updated.",
                SettingKey::SheetWebhookUrl => "Google Sheet URL updated.",
            });
        }
    }
}

/// Ask for missing settings the first time otto runs, that is when the
/// settings file does not exist yet.
///
/// Returns [`Outcome::Quit`] if the user cancels.
///
/// # Errors
///
/// Returns `OttoError::Aborted` if a prompt is aborted.
pub fn ensure_config(session: &mut Session<'_>) -> Result<Outcome> {
    let Some(store) = session.config.settings_store() else {
        return Ok(Outcome::Continue);
    };
    if store.path().exists() {
        return Ok(Outcome::Continue);
    }
    let mut updated = false;

    if !session.config.has_ai() {
        ui::warn("OpenAI API Key is missing.");
        let request = InputRequest::new("Enter your OpenAI API Key:")
            .allow_empty()
            .validate(validator(SettingKey::OpenAiApiKey));
        let Some(key) = session.prompt.input(&request).into_result()? else {
            return Ok(Outcome::Quit);
        };
        warn_on_unusual(SettingKey::OpenAiApiKey, &key);
        updated |= save_setting(session, SettingKey::OpenAiApiKey, &key);
    }

    if !session.config.has_telemetry() {
        let Some(setup) = session
            .prompt
            .confirm("Do you want to configure Google Sheets logging now?", true)
            .into_result()?
        else {
            return Ok(Outcome::Quit);
        };
        if setup {
            let request = InputRequest::new(question(SettingKey::SheetWebhookUrl))
                .allow_empty()
                .validate(validator(SettingKey::SheetWebhookUrl));
            let Some(url) = session.prompt.input(&request).into_result()? else {
                return Ok(Outcome::Quit);
            };
            updated |= save_setting(session, SettingKey::SheetWebhookUrl, &url);
        }
    }

    if updated {
        ui::success("Configuration saved successfully.");
    }
    Ok(Outcome::Continue)
}

/// Persist `value`, reload the configuration and rebuild the services.
/// Shows a notice and returns false if anything fails.
pub fn save_setting(session: &mut Session<'_>, key: SettingKey, value: &str) -> bool {
    let Some(store) = session.config.settings_store() else {
        ui::note(
            "✖ Settings",
            &format!("No settings file location. Set {CONFIG_ENV} or pass --config."),
        );
        return false;
    };
    if let Err(err) = store.update(key, value) {
        ui::note("✖ Settings", &err.user_message());
        return false;
    }
    if let Err(err) = session.config.reload() {
        ui::note("✖ Settings", &format!("{err:#}"));
        return false;
    }
    session.refresh_services();
    info!(%key, "setting saved");

    if session.config.get(key) != Some(value) {
        ui::warn(&format!(
            "{} is set in the environment and takes precedence.",
            key.env_var()
        ));
    }
    true
}

const fn question(key: SettingKey) -> &'static str {
    match key {
        SettingKey::OpenAiApiKey => "Enter new OpenAI API Key:",
        SettingKey::SheetWebhookUrl => "Enter Google Sheet Webhook URL:",
    }
}

fn validator(key: SettingKey) -> Validator {
    match key {
        SettingKey::OpenAiApiKey => validate_api_key,
        SettingKey::SheetWebhookUrl => validate_webhook_url,
    }
}

fn validate_api_key(value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err("API Key is required.".to_string());
    }
    Ok(())
}

fn validate_webhook_url(value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err("URL is required.".to_string());
    }
    if !value.starts_with("http") {
        return Err("Invalid URL.".to_string());
    }
    Ok(())
}

fn warn_on_unusual(key: SettingKey, value: &str) {
    if key == SettingKey::OpenAiApiKey && !value.starts_with(KEY_PREFIX) {
        ui::warn(&format!("Key usually starts with {KEY_PREFIX}"));
    }
}
