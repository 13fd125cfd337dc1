// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Multi-step git operations.
//!
//! ```text
//! switch_branch:  dirty? --> stash push "Otto Auto-Switch"
//!                        --> checkout <target>
//!                        --> stash pop (only if an entry was created)
//! stash_save:     dirty? --> stash push --include-untracked -m <msg>
//! ```

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::types::{PopOutcome, SwitchOutcome};
use super::{AUTO_STASH_MESSAGE, DEFAULT_STASH_MESSAGE, Git};
use crate::core::process::Shell;
use crate::error::{GitError, OttoResult};

/// `ssh://git@host[:port]/path`, `git@host:path`, `https://host/path`.
static REMOTE_URL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^ssh://git@([^:/]+)(?::\d+)?/(.+)$|^git@([^:/]+):(.+)$|^https?://(?:[^@/]+@)?([^/]+)/(.+)$",
    )
    .ok()
});

impl Git {
    /// Stash local changes (tracked only) before switching branches.
    ///
    /// Returns true iff a stash entry was actually created; a clean tree or
    /// a non-repository is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git refuses to stash a dirty tree.
    pub fn auto_stash(&self) -> OttoResult<bool> {
        if !self.is_repository() || !self.is_dirty() {
            return Ok(false);
        }
        let before = self.stash_list().len();
        self.stash_push(AUTO_STASH_MESSAGE, false)?;
        let created = self.stash_list().len() > before;
        debug!(created, "auto-stash");
        Ok(created)
    }

    /// Check out `target`, carrying local changes across via the stash.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` only if the automatic stash itself fails;
    /// checkout and restore failures are reported in the outcome.
    pub fn switch_branch(&self, target: &str) -> OttoResult<SwitchOutcome> {
        let stashed = self.auto_stash()?;

        if let Err(err) = self.checkout(target) {
            warn!(target, stashed, "checkout failed");
            return Ok(SwitchOutcome::CheckoutFailed {
                message: err.user_message(),
                stashed,
            });
        }

        if !stashed {
            return Ok(SwitchOutcome::Switched { restored: false });
        }

        match self.stash_pop(None) {
            Ok(()) => Ok(SwitchOutcome::Switched { restored: true }),
            Err(err) => Ok(SwitchOutcome::RestoreConflict {
                message: err.user_message(),
            }),
        }
    }

    /// Stash everything, including untracked files.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NoLocalChanges` on a clean tree, or a
    /// `GitError::CommandFailed` if git cannot stash.
    pub fn stash_save(&self, message: Option<&str>) -> OttoResult<()> {
        if !self.is_dirty() {
            return Err(GitError::NoLocalChanges.into());
        }
        let message = message
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
            .unwrap_or(DEFAULT_STASH_MESSAGE);
        self.stash_push(message, true)
    }

    /// Pop one stash entry. Conflicts and refusals leave the entry in place.
    ///
    /// A failed pop counts as a conflict only if it left unmerged paths.
    #[must_use]
    pub fn pop_stash(&self, reference: &str) -> PopOutcome {
        let Err(err) = self.stash_pop(Some(reference)) else {
            return PopOutcome::Applied;
        };
        let message = err.user_message();
        if self.has_unmerged_paths() {
            PopOutcome::Conflict { message }
        } else {
            warn!(reference, "stash pop refused");
            PopOutcome::Failed { message }
        }
    }
}

/// Web page for opening a pull request from `branch`, derived from the
/// remote URL. `None` for URLs that are not git hosting addresses.
#[must_use]
pub fn pull_request_url(remote_url: &str, branch: &str) -> Option<String> {
    let re = REMOTE_URL_RE.as_ref()?;
    let caps = re.captures(remote_url.trim())?;
    let host = caps
        .get(1)
        .or_else(|| caps.get(3))
        .or_else(|| caps.get(5))?
        .as_str();
    let path = caps
        .get(2)
        .or_else(|| caps.get(4))
        .or_else(|| caps.get(6))?
        .as_str();
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    if path.is_empty() {
        return None;
    }
    Some(format!("https://{host}/{path}/pull/new/{branch}"))
}

/// Open `url` with the platform's default handler. Failures are logged
/// and otherwise ignored.
pub fn open_url(shell: &Shell, url: &str) {
    let result = if cfg!(target_os = "macos") {
        shell.run("open", &[url])
    } else if cfg!(windows) {
        shell.run("cmd", &["/C", "start", "", url])
    } else {
        shell.run("xdg-open", &[url])
    };
    if let Err(err) = result {
        warn!(url, error = %err, "could not open browser");
    }
}
