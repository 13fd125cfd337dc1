// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Start-of-session check for commits waiting on the remote.
//!
//! ```text
//! not a repo / fetch fails --> skip
//! on main|master|<default> --> rev-list HEAD..<default ref>
//! elsewhere                --> rev-list HEAD..@{u}
//! behind > 0 --> confirm --> pull origin <branch> --> banner
//! ```

use tracing::{debug, info};

use super::{Outcome, Session};
use crate::error::Result;
use crate::ui::{self, Spinner};

/// Branch names treated as the default branch even without an upstream.
const DEFAULT_BRANCH_NAMES: &[&str] = &["main", "master"];

/// Offer to pull if the current branch is behind.
///
/// Cancelling the question ends the program.
///
/// # Errors
///
/// Returns `OttoError::Aborted` if the prompt is aborted.
pub fn check_for_updates(session: &mut Session<'_>) -> Result<Outcome> {
    let git = &session.git;
    if !git.is_repository() {
        return Ok(Outcome::Continue);
    }
    if let Err(err) = git.fetch_all() {
        debug!(error = %err, "fetch failed, skipping update check");
        return Ok(Outcome::Continue);
    }

    let Some(behind) = behind_count(session) else {
        return Ok(Outcome::Continue);
    };
    if behind == 0 {
        return Ok(Outcome::Continue);
    }

    let question = format!("Your branch is behind by {behind} commits. Pull them?");
    let Some(pull) = session.prompt.confirm(&question, true).into_result()? else {
        return Ok(Outcome::Quit);
    };
    if !pull {
        return Ok(Outcome::Continue);
    }

    let branch = session.git.current_branch().to_string();
    info!(%branch, behind, "pulling");
    let spinner = Spinner::start("🔄 Pulling latest changes...");
    match session.git.pull(&branch) {
        Ok(()) => {
            spinner.stop("✔ Updated");
            session.print_banner();
        }
        Err(err) => {
            spinner.stop("✖ Pull Failed");
            ui::note("Error", &err.user_message());
        }
    }
    Ok(Outcome::Continue)
}

/// Commits to pull, `None` when it cannot be determined.
fn behind_count(session: &Session<'_>) -> Option<u32> {
    let git = &session.git;
    let branch = git.current_branch();
    if let Some(default_ref) = git.default_branch_ref() {
        let short = git.default_branch_name();
        if branch
            .name()
            .is_some_and(|name| DEFAULT_BRANCH_NAMES.contains(&name) || name == short)
        {
            return git.commits_behind(&default_ref);
        }
    }
    git.try_upstream_behind_count()
}
