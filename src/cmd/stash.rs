// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stash manager: save with a message, pop any entry.

use super::Session;
use crate::error::Result;
use crate::git::PopOutcome;
use crate::prompt::{Choice, InputRequest, choose};
use crate::ui::{self, Spinner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StashAction {
    Save,
    Pop,
}

/// Main handler for the stash command.
///
/// # Errors
///
/// Returns `OttoError::Aborted` if a prompt is aborted.
pub fn run_stash_command(session: &mut Session<'_>) -> Result<()> {
    if !session.require_repository() {
        return Ok(());
    }
    let actions = [
        Choice::new(StashAction::Save, "💾 Save").hint("Stash current changes"),
        Choice::new(StashAction::Pop, "🥡 Pop").hint("Apply saved stash"),
    ];
    match choose(session.prompt, "Stash Manager", &actions).into_result()? {
        Some(StashAction::Save) => save(session),
        Some(StashAction::Pop) => pop(session),
        None => Ok(()),
    }
}

fn save(session: &mut Session<'_>) -> Result<()> {
    let request = InputRequest::new("Stash Message (Optional)").allow_empty();
    let Some(message) = session.prompt.input(&request).into_result()? else {
        return Ok(());
    };

    let spinner = Spinner::start("Saving stash...");
    match session.git.stash_save(Some(&message)) {
        Ok(()) => spinner.stop("✔ Stashed successfully"),
        Err(err) => {
            drop(spinner);
            ui::note("⚠ Info", &err.user_message());
        }
    }
    Ok(())
}

fn pop(session: &mut Session<'_>) -> Result<()> {
    let stashes = session.git.stash_list();
    if stashes.is_empty() {
        ui::note("ℹ Empty", "No stashes found.");
        return Ok(());
    }
    let choices: Vec<Choice<String>> = stashes
        .into_iter()
        .map(|entry| Choice::new(entry.reference.clone(), entry.message).hint(entry.reference))
        .collect();
    let Some(reference) = choose(session.prompt, "Select Stash to Pop", &choices).into_result()?
    else {
        return Ok(());
    };

    let spinner = Spinner::start(format!("Popping {reference}..."));
    match session.git.pop_stash(&reference) {
        PopOutcome::Applied => spinner.stop("✔ Popped successfully"),
        PopOutcome::Conflict { .. } => {
            spinner.stop("✖ Pop resulted in conflicts");
            ui::note(
                "⚠ Conflict",
                "Changes are applied but there are merge conflicts. Resolve them manually.",
            );
        }
        PopOutcome::Failed { message } => {
            spinner.stop("✖ Pop failed");
            ui::note("Git Error", &message);
        }
    }
    Ok(())
}
