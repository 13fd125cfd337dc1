// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use tracing::debug;

use super::{InputRequest, Prompt, Prompted, SelectItem};

/// Prompts on the controlling terminal.
#[derive(Default)]
pub struct TermPrompt {
    theme: ColorfulTheme,
}

impl TermPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for TermPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermPrompt").finish_non_exhaustive()
    }
}

impl Prompt for TermPrompt {
    fn select(&mut self, message: &str, items: &[SelectItem]) -> Prompted<usize> {
        let lines: Vec<String> = items.iter().map(render_item).collect();
        let result = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&lines)
            .default(0)
            .interact_opt();
        classify(result)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Prompted<bool> {
        let result = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact_opt();
        classify(result)
    }

    fn input(&mut self, request: &InputRequest<'_>) -> Prompted<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(request.message)
            .allow_empty(true);
        if let Some(initial) = request.initial {
            input = input.with_initial_text(initial);
        }
        if let Some(validate) = request.validate {
            let allow_empty = request.allow_empty;
            input = input.validate_with(move |value: &String| {
                if value.trim().is_empty() && !allow_empty {
                    return Ok(());
                }
                validate(value)
            });
        }
        match input.interact_text() {
            Ok(value) if value.trim().is_empty() && !request.allow_empty => Prompted::Cancelled,
            Ok(value) => Prompted::Submitted(value.trim().to_string()),
            Err(err) => {
                debug!(error = %err, "input aborted");
                Prompted::Aborted
            }
        }
    }
}

fn render_item(item: &SelectItem) -> String {
    match &item.hint {
        Some(hint) => format!("{}  {}", item.label, hint.dimmed()),
        None => item.label.clone(),
    }
}

/// `Ok(None)` is Esc/q; any terminal error (Ctrl-C included) aborts.
fn classify<T>(result: dialoguer::Result<Option<T>>) -> Prompted<T> {
    match result {
        Ok(Some(value)) => Prompted::Submitted(value),
        Ok(None) => Prompted::Cancelled,
        Err(err) => {
            debug!(error = %err, "prompt aborted");
            Prompted::Aborted
        }
    }
}
