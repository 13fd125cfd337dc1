// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync: pull the current branch from `origin` and fix its upstream.
//!
//! ```text
//! git fetch origin
//! git ls-remote --heads origin <branch>   empty --> "push first" notice
//! git pull origin <branch>
//! git branch --set-upstream-to=origin/<branch> <branch>   (lenient)
//! ```

use tracing::{debug, info};

use super::Session;
use crate::error::{OttoResult, Result};
use crate::git::{Git, REMOTE};
use crate::ui::{self, Spinner};

/// How a sync ended.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SyncOutcome {
    Pulled,
    NoRemoteBranch,
}

/// Main handler for the sync command.
///
/// # Errors
///
/// Never fails; git errors are reported on screen.
pub fn run_sync_command(session: &Session<'_>) -> Result<()> {
    if !session.require_repository() {
        return Ok(());
    }
    let current = session.git.current_branch();
    let Some(branch) = current.name() else {
        ui::note("ℹ Info", &format!("Not on a branch ({current}), nothing to sync."));
        return Ok(());
    };

    let spinner = Spinner::start("📡 Fetching origin...");
    match sync_branch(&session.git, branch, &spinner) {
        Ok(SyncOutcome::Pulled) => {
            info!(%branch, "synced");
            spinner.stop("✔ Sync Complete");
        }
        Ok(SyncOutcome::NoRemoteBranch) => {
            spinner.stop("⚠ No remote branch");
            ui::note(
                "ℹ Info",
                &format!(
                    "Branch '{REMOTE}/{branch}' does not exist.\nPush your branch first to enable syncing."
                ),
            );
        }
        Err(err) => {
            spinner.stop("✖ Sync Failed");
            ui::note("Git Error", &err.user_message());
        }
    }
    Ok(())
}

fn sync_branch(git: &Git, branch: &str, spinner: &Spinner) -> OttoResult<SyncOutcome> {
    git.fetch_remote()?;
    if !git.remote_branch_exists(branch)? {
        return Ok(SyncOutcome::NoRemoteBranch);
    }

    spinner.message(format!("🔄 Pulling {REMOTE}/{branch}..."));
    git.pull(branch)?;

    if let Err(err) = git.set_upstream(branch) {
        debug!(error = %err, "could not set upstream");
    }
    Ok(SyncOutcome::Pulled)
}
