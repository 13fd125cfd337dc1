// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Status banner shown at startup and after a pull.
//!
//! ```text
//! 👋 Hello, Jane (on feature/x)
//! 🔧 Using: pnpm
//! ⚡ Services: AI + Sheets
//! ──────────────────────────────────────────────────
//! 🌿 origin/main   1a2b3c4 feat: add login (2 days ago)
//! 📍 HEAD          9f8e7d6 wip (5 minutes ago)
//! 📉 Status:      3 commits behind origin/main
//! ```
//!
//! Only the behind count is computed; there is no ahead figure.

use colored::Colorize;
use std::fmt::Write as _;

use super::paint;
use super::text::truncate_chars;
use crate::config::Config;
use crate::git::{CommitInfo, Git};
use crate::package::PackageManager;

const SUBJECT_WIDTH: usize = 40;
const RULE_WIDTH: usize = 50;

/// Repository part of the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoStatus {
    pub default_ref: String,
    pub default_tip: Option<CommitInfo>,
    pub head: Option<CommitInfo>,
    /// `None` when the count could not be determined.
    pub behind: Option<u32>,
}

/// Everything the banner shows, gathered fresh from the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub user: String,
    pub branch: String,
    pub package_manager: PackageManager,
    pub ai: bool,
    pub sheets: bool,
    /// `None` outside a repository.
    pub repo: Option<RepoStatus>,
}

impl Banner {
    #[must_use]
    pub fn collect(git: &Git, package_manager: PackageManager, config: &Config) -> Self {
        let repo = git.default_branch_ref().map(|default_ref| RepoStatus {
            default_tip: git.commit_info(&default_ref),
            head: git.commit_info("HEAD"),
            behind: git.commits_behind(&default_ref),
            default_ref,
        });
        Self {
            user: git.current_user(),
            branch: git.current_branch().to_string(),
            package_manager,
            ai: config.has_ai(),
            sheets: config.has_telemetry(),
            repo,
        }
    }

    #[must_use]
    pub fn render(&self, color: bool) -> String {
        let mut out = String::new();
        let branch = paint(&self.branch, color, |s| s.cyan().to_string());
        let _ = writeln!(
            out,
            "{}",
            paint(
                &format!("👋 Hello, {} (on {branch})", self.user),
                color,
                |s| s.dimmed().to_string()
            )
        );
        let _ = writeln!(
            out,
            "{}",
            paint(&format!("🔧 Using: {}", self.package_manager), color, |s| {
                s.dimmed().to_string()
            })
        );

        let services: Vec<&str> = [(self.ai, "AI"), (self.sheets, "Sheets")]
            .into_iter()
            .filter_map(|(on, name)| on.then_some(name))
            .collect();
        if !services.is_empty() {
            let line = format!("⚡ Services: {}", services.join(" + "));
            let _ = writeln!(out, "{}", paint(&line, color, |s| s.dimmed().to_string()));
        }

        let Some(repo) = &self.repo else {
            out.push_str(&super::render_note(
                "ℹ Git",
                "You're not inside a git repository.",
                color,
            ));
            return out;
        };

        let _ = writeln!(
            out,
            "{}",
            paint(&"─".repeat(RULE_WIDTH), color, |s| s.dimmed().to_string())
        );
        if let Some(tip) = &repo.default_tip {
            let label = format!("🌿 {:<12}", repo.default_ref);
            let _ = writeln!(
                out,
                "{} {}",
                paint(&label, color, |s| s.green().to_string()),
                commit_line(tip, color)
            );
        }
        if let Some(head) = &repo.head {
            let label = format!("📍 {:<12}", "HEAD");
            let _ = writeln!(
                out,
                "{} {}",
                paint(&label, color, |s| s.blue().to_string()),
                commit_line(head, color)
            );
        }
        match repo.behind.unwrap_or(0) {
            0 => {
                let line = format!("✓ Up to date with {}", repo.default_ref);
                out.push_str(&paint(&line, color, |s| s.dimmed().to_string()));
            }
            behind => {
                let line = format!(
                    "📉 Status:      {behind} commits behind {}",
                    repo.default_ref
                );
                out.push_str(&paint(&line, color, |s| s.yellow().to_string()));
            }
        }
        out
    }

    /// Clear the screen and print the banner.
    pub fn print(&self) {
        print!("\x1B[2J\x1B[1;1H");
        super::intro("Otto");
        println!("{}", self.render(true));
    }
}

fn commit_line(info: &CommitInfo, color: bool) -> String {
    format!(
        "{} {} {}",
        paint(&info.hash, color, |s| s.dimmed().to_string()),
        paint(truncate_chars(&info.subject, SUBJECT_WIDTH), color, |s| {
            s.white().to_string()
        }),
        paint(&format!("({})", info.relative_time), color, |s| {
            s.dimmed().to_string()
        })
    )
}
