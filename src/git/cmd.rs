// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git commands that change the repository or talk to the remote.
//!
//! ```text
//! cmd.rs --> Shell::git --> git (non-zero exit = GitError::CommandFailed)
//! ```

use super::types::{PushMode, ResetMode};
use super::{Git, REMOTE};
use crate::error::OttoResult;
use tracing::info;

impl Git {
    /// `git fetch` with the default remote configuration.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the fetch fails.
    pub fn fetch_all(&self) -> OttoResult<()> {
        self.shell.git(&["fetch"]).map(drop)
    }

    /// `git fetch origin`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the fetch fails.
    pub fn fetch_remote(&self) -> OttoResult<()> {
        self.shell.git(&["fetch", REMOTE]).map(drop)
    }

    /// `git fetch origin <branch>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the fetch fails.
    pub fn fetch_branch(&self, branch: &str) -> OttoResult<()> {
        self.shell.git(&["fetch", REMOTE, branch]).map(drop)
    }

    /// `git pull origin <branch>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pull fails (conflicts, diverged history).
    pub fn pull(&self, branch: &str) -> OttoResult<()> {
        info!(branch, "pulling");
        self.shell.git(&["pull", REMOTE, branch]).map(drop)
    }

    /// Point `branch` at `origin/<branch>` as its upstream.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git rejects the upstream.
    pub fn set_upstream(&self, branch: &str) -> OttoResult<()> {
        let upstream = format!("--set-upstream-to={REMOTE}/{branch}");
        self.shell.git(&["branch", &upstream, branch]).map(drop)
    }

    /// `git checkout <target>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout fails.
    pub fn checkout(&self, target: &str) -> OttoResult<()> {
        self.shell.git(&["checkout", target]).map(drop)
    }

    /// `git checkout -b <name>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the name is invalid or already exists.
    pub fn create_branch(&self, name: &str) -> OttoResult<()> {
        info!(branch = name, "creating branch");
        self.shell.git(&["checkout", "-b", name]).map(drop)
    }

    /// `git stash push [--include-untracked] -m <message>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git cannot create the stash.
    pub fn stash_push(&self, message: &str, include_untracked: bool) -> OttoResult<()> {
        let mut args = vec!["stash", "push"];
        if include_untracked {
            args.push("--include-untracked");
        }
        args.extend(["-m", message]);
        self.shell.git(&args).map(drop)
    }

    /// `git stash pop [<reference>]`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pop fails or conflicts.
    pub fn stash_pop(&self, reference: Option<&str>) -> OttoResult<()> {
        match reference {
            Some(reference) => self.shell.git(&["stash", "pop", reference]),
            None => self.shell.git(&["stash", "pop"]),
        }
        .map(drop)
    }

    /// `git add .`
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if staging fails.
    pub fn stage_all(&self) -> OttoResult<()> {
        self.shell.git(&["add", "."]).map(drop)
    }

    /// `git commit -m <message>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails (hooks, nothing staged).
    pub fn commit(&self, message: &str) -> OttoResult<()> {
        self.shell.git(&["commit", "-m", message]).map(drop)
    }

    /// `git push origin HEAD [--force] --tags`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote rejects the push.
    pub fn push_head(&self, mode: PushMode) -> OttoResult<()> {
        let mut args = vec!["push", REMOTE, "HEAD"];
        if mode == PushMode::Force {
            args.push("--force");
        }
        args.push("--tags");
        info!(?mode, "pushing");
        self.shell.git(&args).map(drop)
    }

    /// `git tag -d <tag>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the tag does not exist.
    pub fn delete_tag(&self, tag: &str) -> OttoResult<()> {
        self.shell.git(&["tag", "-d", tag]).map(drop)
    }

    /// `git reset --<mode> <target>`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the target does not resolve.
    pub fn reset(&self, mode: ResetMode, target: &str) -> OttoResult<()> {
        info!(mode = mode.flag(), target, "resetting");
        self.shell.git(&["reset", mode.flag(), target]).map(drop)
    }
}
