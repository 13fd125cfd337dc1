// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only repository queries.
//!
//! ```text
//! query.rs --> Shell::git_or_empty --> git (failures become sentinels)
//! ```

use super::types::{BranchState, CommitInfo, HistoryEntry, StashEntry};
use super::{Git, MAIN_BRANCH, REMOTE};
use crate::error::OttoResult;

/// Author name shown when `user.name` is not configured.
pub const UNKNOWN_USER: &str = "Ghost";

impl Git {
    /// True iff the working directory is inside a git work tree.
    #[must_use]
    pub fn is_repository(&self) -> bool {
        self.shell
            .git_or_empty(&["rev-parse", "--is-inside-work-tree"])
            == "true"
    }

    /// Current HEAD state.
    ///
    /// A repository without commits is [`BranchState::Unborn`] even though
    /// HEAD already names a branch.
    #[must_use]
    pub fn current_branch(&self) -> BranchState {
        if !self.is_repository() {
            return BranchState::NoRepository;
        }
        let head = self.shell.git_or_empty(&["rev-parse", "--short", "HEAD"]);
        if head.is_empty() {
            return BranchState::Unborn;
        }
        let name = self
            .shell
            .git_or_empty(&["symbolic-ref", "--short", "-q", "HEAD"]);
        if name.is_empty() {
            BranchState::Detached(head)
        } else {
            BranchState::Named(name)
        }
    }

    /// `origin/main` if it resolves, else `origin/master`, else `main`.
    /// `None` outside a repository.
    #[must_use]
    pub fn default_branch_ref(&self) -> Option<String> {
        if !self.is_repository() {
            return None;
        }
        for candidate in ["origin/main", "origin/master"] {
            if self.shell.git(&["rev-parse", "--verify", candidate]).is_ok() {
                return Some(candidate.to_string());
            }
        }
        Some(MAIN_BRANCH.to_string())
    }

    /// Branch name of [`Git::default_branch_ref`] without the remote
    /// prefix, [`MAIN_BRANCH`] outside a repository.
    #[must_use]
    pub fn default_branch_name(&self) -> String {
        let Some(default_ref) = self.default_branch_ref() else {
            return MAIN_BRANCH.to_string();
        };
        default_ref
            .strip_prefix(REMOTE)
            .and_then(|rest| rest.strip_prefix('/'))
            .map_or_else(|| default_ref.clone(), ToString::to_string)
    }

    /// Tip commit of `reference`, `None` if it does not resolve.
    #[must_use]
    pub fn commit_info(&self, reference: &str) -> Option<CommitInfo> {
        let line = self
            .shell
            .git_or_empty(&["log", "-1", "--format=%h|%s|%ar", reference]);
        CommitInfo::parse(&line)
    }

    /// Commits reachable from `target` but not from HEAD.
    ///
    /// `None` when the count cannot be determined (no repository, unknown
    /// ref, no upstream for `@{u}`).
    #[must_use]
    pub fn commits_behind(&self, target: &str) -> Option<u32> {
        let range = format!("HEAD..{target}");
        self.shell
            .git_or_empty(&["rev-list", "--count", &range])
            .parse()
            .ok()
    }

    /// Commits on the upstream of the current branch not yet in HEAD.
    #[must_use]
    pub fn try_upstream_behind_count(&self) -> Option<u32> {
        self.commits_behind("@{u}")
    }

    /// Like [`Git::try_upstream_behind_count`], `0` when unknown.
    #[must_use]
    pub fn upstream_behind_count(&self) -> u32 {
        self.try_upstream_behind_count().unwrap_or(0)
    }

    /// `user.name`, or [`UNKNOWN_USER`].
    #[must_use]
    pub fn current_user(&self) -> String {
        let name = self.shell.git_or_empty(&["config", "user.name"]);
        if name.is_empty() {
            UNKNOWN_USER.to_string()
        } else {
            name
        }
    }

    /// `diff --cached --stat`; empty means nothing is staged.
    #[must_use]
    pub fn staged_summary(&self) -> String {
        self.shell.git_or_empty(&["diff", "--cached", "--stat"])
    }

    /// Full staged patch.
    #[must_use]
    pub fn staged_raw_diff(&self) -> String {
        self.shell.git_or_empty(&["diff", "--cached"])
    }

    /// Any staged, unstaged, or untracked change.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.shell.git_or_empty(&["status", "--porcelain"]).is_empty()
    }

    /// Paths left unmerged by a conflicted merge, pop or checkout.
    #[must_use]
    pub fn has_unmerged_paths(&self) -> bool {
        !self
            .shell
            .git_or_empty(&["diff", "--name-only", "--diff-filter=U"])
            .is_empty()
    }

    /// Last `limit` commits on HEAD, newest first.
    #[must_use]
    pub fn recent_history(&self, limit: usize) -> Vec<HistoryEntry> {
        let count = limit.to_string();
        self.shell
            .git_or_empty(&["log", "-n", &count, "--pretty=format:%h|%s|%an|%ar"])
            .lines()
            .filter_map(HistoryEntry::parse)
            .collect()
    }

    /// Stash stack, most recent first.
    #[must_use]
    pub fn stash_list(&self) -> Vec<StashEntry> {
        self.shell
            .git_or_empty(&["stash", "list"])
            .lines()
            .filter_map(StashEntry::parse)
            .collect()
    }

    /// Local branch names.
    #[must_use]
    pub fn local_branches(&self) -> Vec<String> {
        self.shell
            .git_or_empty(&["branch", "--format=%(refname:short)"])
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Fetch URL of `origin`.
    #[must_use]
    pub fn remote_url(&self) -> Option<String> {
        let key = format!("remote.{REMOTE}.url");
        let url = self.shell.git_or_empty(&["config", "--get", &key]);
        (!url.is_empty()).then_some(url)
    }

    /// Most recent tag reachable from HEAD.
    #[must_use]
    pub fn latest_tag(&self) -> Option<String> {
        let tag = self.shell.git_or_empty(&["describe", "--tags", "--abbrev=0"]);
        (!tag.is_empty()).then_some(tag)
    }

    /// Full hash of HEAD.
    #[must_use]
    pub fn head_hash(&self) -> Option<String> {
        let hash = self.shell.git_or_empty(&["rev-parse", "HEAD"]);
        (!hash.is_empty()).then_some(hash)
    }

    /// Whether `origin` has a branch called `branch`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote cannot be queried.
    pub fn remote_branch_exists(&self, branch: &str) -> OttoResult<bool> {
        let heads = self.shell.git(&["ls-remote", "--heads", REMOTE, branch])?;
        Ok(!heads.is_empty())
    }
}
