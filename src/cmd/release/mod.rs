// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release command: build, commit, bump, push.
//!
//! ```text
//! plan      bump / build / push / "Start Release?"   (cancel: nothing done)
//! pipeline  fetch origin <default branch> (lenient)
//!           <pm> install, <pm> run build             (per build mode)
//!           git add .
//! commit    staged diff --> AI suggestion --> edit --> git commit
//!           (no diff, AI error or commit error: no commit, continue)
//! publish   <pm> version <bump> --> git push origin HEAD --tags
//!           ok:   telemetry
//!           fail: delete tag + reset --soft HEAD~1 (only if the bump moved HEAD)
//! ```

use tracing::{debug, info, warn};

use super::Session;
use crate::cli::release::ReleaseArgs;
use crate::error::{OttoResult, Result};
use crate::git::{Git, PushMode, ResetMode};
use crate::package::{BuildMode, VersionBump};
use crate::prompt::{Choice, InputRequest, Prompt, choose};
use crate::services::ReleaseEvent;
use crate::ui::text::wrap;
use crate::ui::{self, Spinner};

/// Width of the AI summary shown before the commit prompt.
const SUMMARY_WIDTH: usize = 60;

/// Choices made before anything runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleasePlan {
    pub bump: VersionBump,
    pub build: BuildMode,
    pub push: PushMode,
}

/// What ends up in the release record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub message: String,
    pub description: String,
}

impl CommitRecord {
    /// Record for a release without a commit of its own.
    #[must_use]
    pub fn none() -> Self {
        Self {
            message: "Manual/No Commit".to_string(),
            description: "No changes".to_string(),
        }
    }
}

/// Main handler for the release command.
///
/// # Errors
///
/// Returns `OttoError::Aborted` if a prompt is aborted. Every other failure
/// is reported on screen.
pub async fn run_release_command(session: &mut Session<'_>, args: &ReleaseArgs) -> Result<()> {
    if !session.require_repository() {
        return Ok(());
    }
    let Some(plan) = gather_plan(session.prompt, args)? else {
        debug!("release cancelled");
        return Ok(());
    };
    info!(?plan, "starting release");

    if !run_pipeline(session, plan.build) {
        return Ok(());
    }
    let Some(record) = commit_staged(session).await? else {
        return Ok(());
    };
    publish(session, plan, record).await;
    Ok(())
}

/// Ask for every option not given on the command line, then confirm.
/// `None` if the user backs out.
///
/// # Errors
///
/// Returns `OttoError::Aborted` if a prompt is aborted.
pub fn gather_plan(prompt: &mut dyn Prompt, args: &ReleaseArgs) -> OttoResult<Option<ReleasePlan>> {
    let bump = match args.bump {
        Some(bump) => bump,
        None => match choose(prompt, "Release Type", &bump_choices()).into_result()? {
            Some(bump) => bump,
            None => return Ok(None),
        },
    };
    let build = match args.build {
        Some(build) => build,
        None => match choose(prompt, "Build Options", &build_choices()).into_result()? {
            Some(build) => build,
            None => return Ok(None),
        },
    };
    let push = match args.push {
        Some(push) => push,
        None => match choose(prompt, "Push Mode", &push_choices()).into_result()? {
            Some(push) => push,
            None => return Ok(None),
        },
    };
    if !args.yes && prompt.confirm("Start Release?", true).into_result()? != Some(true) {
        return Ok(None);
    }
    Ok(Some(ReleasePlan { bump, build, push }))
}

fn bump_choices() -> [Choice<VersionBump>; 4] {
    [
        Choice::new(VersionBump::Patch, "Patch").hint("Bug fixes"),
        Choice::new(VersionBump::Minor, "Minor").hint("New features"),
        Choice::new(VersionBump::Major, "Major").hint("Breaking changes"),
        Choice::new(VersionBump::None, "Snapshot").hint("No version bump"),
    ]
}

fn build_choices() -> [Choice<BuildMode>; 3] {
    [
        Choice::new(BuildMode::Full, "Full Build").hint("Install deps + build"),
        Choice::new(BuildMode::Install, "Install Only").hint("Install deps, skip build"),
        Choice::new(BuildMode::Skip, "Skip Build").hint("Just commit and push"),
    ]
}

fn push_choices() -> [Choice<PushMode>; 2] {
    [
        Choice::new(PushMode::Safe, "Safe Push").hint("Standard push"),
        Choice::new(PushMode::Force, "Force Push").hint("Overwrite remote"),
    ]
}

/// Fetch, install, build and stage. False if a step failed.
fn run_pipeline(session: &Session<'_>, build: BuildMode) -> bool {
    let spinner = Spinner::start("Syncing origin...");
    match pipeline_steps(session, build, &spinner) {
        Ok(missing_build_script) => {
            spinner.stop("Pipeline Ready");
            if missing_build_script {
                ui::info("No build script declared, build skipped.");
            }
            true
        }
        Err(err) => {
            spinner.stop("Pipeline Failed");
            ui::note("Error", &err.user_message());
            false
        }
    }
}

/// Returns true if a full build was requested but there is no build script.
fn pipeline_steps(session: &Session<'_>, build: BuildMode, spinner: &Spinner) -> OttoResult<bool> {
    if let Err(err) = session.git.fetch_branch(&session.git.default_branch_name()) {
        debug!(error = %err, "pre-flight fetch failed");
    }

    let mut missing_build_script = false;
    if build != BuildMode::Skip {
        spinner.message("Installing dependencies...");
        session.package.install()?;

        if build == BuildMode::Full {
            if session.package.has_build_script() {
                spinner.message("Building project...");
                session.package.build()?;
            } else {
                missing_build_script = true;
            }
        }
    }

    spinner.message("Staging files...");
    session.git.stage_all()?;
    Ok(missing_build_script)
}

/// Commit whatever is staged with an AI-suggested message.
///
/// `None` if the user cancelled the commit message, which ends the release.
async fn commit_staged(session: &mut Session<'_>) -> Result<Option<CommitRecord>> {
    let diff = session.git.staged_raw_diff();
    if diff.is_empty() {
        ui::note("ℹ Skip", "No changes to commit");
        return Ok(Some(CommitRecord::none()));
    }

    let spinner = Spinner::start("🤖 AI Analyzing changes");
    let suggestion = match session.generator.generate(&diff).await {
        Ok(suggestion) => {
            spinner.stop("✔ AI Analysis Complete");
            suggestion
        }
        Err(err) => {
            spinner.stop("✖ AI Failed");
            warn!(error = %err, "commit message generation failed");
            ui::note("⚠ warning", "AI Generation failed or commit aborted");
            return Ok(Some(CommitRecord::none()));
        }
    };

    ui::note("📋 AI Summary", &wrap(&suggestion.desc, SUMMARY_WIDTH));
    let request = InputRequest::new("Commit Message").initial(&suggestion.msg);
    let Some(message) = session.prompt.input(&request).into_result()? else {
        debug!("commit message cancelled");
        return Ok(None);
    };

    if let Err(err) = session.git.commit(&message) {
        warn!(error = %err, "commit failed");
        ui::note("⚠ warning", "AI Generation failed or commit aborted");
        return Ok(Some(CommitRecord::none()));
    }
    ui::success("Committed");
    Ok(Some(CommitRecord {
        message,
        description: suggestion.desc,
    }))
}

/// Bump, push, record. Rolls the bump back if the push fails.
async fn publish(session: &Session<'_>, plan: ReleasePlan, record: CommitRecord) {
    let git = &session.git;
    let head_before = git.head_hash();

    let start = if plan.bump.level().is_some() {
        format!("🔖 Bumping {}...", plan.bump)
    } else {
        "🚀 Preparing push...".to_string()
    };
    let spinner = Spinner::start(start);

    let pushed = session.package.bump_version(plan.bump).and_then(|()| {
        spinner.message("🚀 Pushing to origin");
        git.push_head(plan.push)
    });

    match pushed {
        Ok(()) => {
            let event = ReleaseEvent {
                user: git.current_user(),
                branch: git.current_branch().to_string(),
                kind: plan.bump.to_string(),
                message: record.message,
                description: record.description,
            };
            session.telemetry.record(&event).await;
            spinner.stop("✔ Deployed");
            info!(bump = %plan.bump, "released");
        }
        Err(err) => {
            spinner.stop("✖ Push Failed. Rolling back");
            ui::note("Error", &err.user_message());
            if roll_back_bump(git, plan.bump, head_before.as_deref()) {
                ui::note("✅ Rollback", "Tag deleted & commit reset.");
            }
        }
    }
}

/// Undo the commit and tag created by the version bump.
///
/// Does nothing unless a bump was requested and HEAD moved since
/// `head_before`, so a commit made earlier in the release is never
/// unwound. Failures are logged and swallowed. Returns true if the reset
/// went through.
pub fn roll_back_bump(git: &Git, bump: VersionBump, head_before: Option<&str>) -> bool {
    if bump.level().is_none() {
        return false;
    }
    let head_now = git.head_hash();
    if head_now.is_none() || head_now.as_deref() == head_before {
        debug!("version bump created no commit, nothing to roll back");
        return false;
    }

    if let Some(tag) = git.latest_tag()
        && let Err(err) = git.delete_tag(&tag)
    {
        warn!(%tag, error = %err, "could not delete release tag");
    }
    match git.reset(ResetMode::Soft, "HEAD~1") {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "could not reset version bump commit");
            false
        }
    }
}
