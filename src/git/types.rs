// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Values read from git's fixed-format text output.
//!
//! ```text
//! log -1 --format=%h|%s|%ar        --> CommitInfo
//! log -n N --pretty=format:%h|%s|%an|%ar --> HistoryEntry
//! stash list  "stash@{0}: On main: msg"  --> StashEntry
//! ```
//!
//! Subjects may contain `|`, so the hash is taken from the left and the
//! trailing fields from the right.

use clap::ValueEnum;
use std::fmt;

/// Sentinel branch name outside a repository.
pub const NO_REPOSITORY: &str = "no-git";

/// What HEAD currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchState {
    /// A named local branch with at least one commit.
    Named(String),
    /// Detached HEAD at the given short hash.
    Detached(String),
    /// Repository without any commit yet.
    Unborn,
    /// Not inside a git work tree.
    NoRepository,
}

impl BranchState {
    /// Branch name if HEAD is on a named branch.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for BranchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Detached(hash) => write!(f, "detached@{hash}"),
            Self::Unborn => f.write_str("unborn"),
            Self::NoRepository => f.write_str(NO_REPOSITORY),
        }
    }
}

/// Tip commit of a ref, as shown in the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub hash: String,
    pub subject: String,
    pub relative_time: String,
}

impl CommitInfo {
    /// Parse one `%h|%s|%ar` line.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let (hash, rest) = line.trim().split_once('|')?;
        let (subject, relative_time) = rest.rsplit_once('|')?;
        if hash.is_empty() {
            return None;
        }
        Some(Self {
            hash: hash.to_string(),
            subject: subject.to_string(),
            relative_time: relative_time.to_string(),
        })
    }
}

/// One entry of `recent_history`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub hash: String,
    pub subject: String,
    pub author: String,
    pub relative_time: String,
}

impl HistoryEntry {
    /// Parse one `%h|%s|%an|%ar` line.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let (hash, rest) = line.trim().split_once('|')?;
        let (rest, relative_time) = rest.rsplit_once('|')?;
        let (subject, author) = rest.rsplit_once('|')?;
        if hash.is_empty() {
            return None;
        }
        Some(Self {
            hash: hash.to_string(),
            subject: subject.to_string(),
            author: author.to_string(),
            relative_time: relative_time.to_string(),
        })
    }
}

/// One entry of `git stash list`, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashEntry {
    /// Stack address, e.g. `stash@{0}`.
    pub reference: String,
    /// Everything after the first colon, e.g. `On main: WIP`.
    pub message: String,
}

impl StashEntry {
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (reference, message) = line.split_once(':').unwrap_or((line, ""));
        Some(Self {
            reference: reference.to_string(),
            message: message.trim().to_string(),
        })
    }
}

/// How far `git reset` reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResetMode {
    /// Keep changes staged.
    Soft,
    /// Keep changes in the working tree, unstaged.
    Mixed,
    /// Discard all changes.
    Hard,
}

impl ResetMode {
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Soft => "--soft",
            Self::Mixed => "--mixed",
            Self::Hard => "--hard",
        }
    }
}

/// Whether a push may overwrite remote history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PushMode {
    /// Fast-forward only.
    #[default]
    Safe,
    /// Overwrite the remote.
    Force,
}

/// Result of switching branches with an automatic stash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Checked out; `restored` is true if stashed changes were re-applied.
    Switched { restored: bool },
    /// Checkout failed. If `stashed`, the changes are still on the stash.
    CheckoutFailed { message: String, stashed: bool },
    /// Checked out, but re-applying the stash conflicted.
    RestoreConflict { message: String },
}

/// Result of popping a stash entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopOutcome {
    Applied,
    /// Applied with merge conflicts; the entry stays on the stack.
    Conflict { message: String },
    /// Git refused the pop and nothing was applied.
    Failed { message: String },
}
