// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API (methods on Git)
//!   query.rs      cmd.rs       ops.rs
//!   (read)       (write)    (multi-step)
//!        \          |          /
//!         v         v         v
//!      ,---------------------------,
//!      |  Shell (core::process)    |
//!      |  git / git_or_empty       |
//!      '-------------+-------------'
//!                    |
//!                    v
//!             CommandRunner
//!         SystemRunner | ScriptedRunner
//! ```
//!
//! Queries never fail: outside a repository or on any git error they
//! return a sentinel (`None`, empty list, `"no-git"`). Mutations return
//! [`OttoResult`](crate::error::OttoResult) carrying git's own stderr.

pub mod cmd;
pub mod ops;
pub mod query;
pub mod types;


use crate::core::process::Shell;
use std::path::Path;

pub use ops::{open_url, pull_request_url};
pub use types::{
    BranchState, CommitInfo, HistoryEntry, NO_REPOSITORY, PopOutcome, PushMode, ResetMode,
    StashEntry, SwitchOutcome,
};

/// Remote every flow talks to.
pub const REMOTE: &str = "origin";

/// Branch the release flow fetches and branch updates pull.
pub const MAIN_BRANCH: &str = "main";

/// Message of the stash entry created when switching branches.
pub const AUTO_STASH_MESSAGE: &str = "Otto Auto-Switch";

/// Default message for a manual stash.
pub const DEFAULT_STASH_MESSAGE: &str = "Otto Stash";

/// Git access for one working directory.
#[derive(Debug, Clone)]
pub struct Git {
    shell: Shell,
}

impl Git {
    #[must_use]
    pub const fn new(shell: Shell) -> Self {
        Self { shell }
    }

    #[must_use]
    pub const fn shell(&self) -> &Shell {
        &self.shell
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        self.shell.working_dir()
    }
}
