// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rollback: reset the current branch to one of the last 15 commits.

use tracing::info;

use super::Session;
use crate::error::Result;
use crate::git::ResetMode;
use crate::prompt::{Choice, choose};
use crate::ui;

/// Commits offered as reset targets.
pub const HISTORY_LIMIT: usize = 15;

/// Main handler for the undo command.
///
/// # Errors
///
/// Returns `OttoError::Aborted` if a prompt is aborted.
pub fn run_undo_command(session: &mut Session<'_>) -> Result<()> {
    if !session.require_repository() {
        return Ok(());
    }
    let history = session.git.recent_history(HISTORY_LIMIT);
    if history.is_empty() {
        ui::note("ℹ Empty", "No commit history found to undo.");
        return Ok(());
    }

    let commits: Vec<Choice<usize>> = history
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let current = if index == 0 { " (Current)" } else { "" };
            Choice::new(index, format!("{} {}{current}", entry.hash, entry.subject))
                .hint(format!("{}, {}", entry.author, entry.relative_time))
        })
        .collect();
    let Some(index) =
        choose(session.prompt, "Reset branch to which commit?", &commits).into_result()?
    else {
        return Ok(());
    };
    if index == 0 {
        ui::note("ℹ Info", "You selected the current commit. No changes made.");
        return Ok(());
    }
    let target = &history[index].hash;

    let modes = [
        Choice::new(ResetMode::Soft, "🧸 Soft Reset").hint("Keep changes staged"),
        Choice::new(ResetMode::Mixed, "🚧 Mixed Reset").hint("Keep changes in working dir"),
        Choice::new(ResetMode::Hard, "🧨 Hard Reset").hint("DESTROY changes"),
    ];
    let Some(mode) = choose(session.prompt, "How should we reset?", &modes).into_result()? else {
        return Ok(());
    };

    if mode == ResetMode::Hard {
        let sure = session
            .prompt
            .confirm("⚠️  This will delete all uncommitted changes. Sure?", false)
            .into_result()?;
        if sure != Some(true) {
            return Ok(());
        }
    }

    match session.git.reset(mode, target) {
        Ok(()) => {
            info!(%target, mode = mode.flag(), "reset");
            ui::success(&format!("Reset complete ({})", mode.flag()));
            ui::note("ℹ Reset Info", &format!("HEAD is now at {target}"));
        }
        Err(err) => {
            ui::error("Reset failed");
            ui::note("Git Error", &err.user_message());
        }
    }
    Ok(())
}
