// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch manager: switch, create, update from main, open a pull request.

use tracing::info;

use super::Session;
use crate::error::Result;
use crate::git::{SwitchOutcome, open_url, pull_request_url};
use crate::prompt::{Choice, InputRequest, choose};
use crate::ui::{self, Spinner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BranchAction {
    Switch,
    Create,
    Update,
    OpenPr,
}

/// Main handler for the branch command.
///
/// # Errors
///
/// Returns `OttoError::Aborted` if a prompt is aborted, or a `GitError` if
/// git refuses to stash local changes before a switch.
pub fn run_branch_command(session: &mut Session<'_>) -> Result<()> {
    if !session.require_repository() {
        return Ok(());
    }
    let actions = [
        Choice::new(BranchAction::Switch, "🔀 Switch").hint("Auto-Stash & Switch"),
        Choice::new(BranchAction::Create, "✨ Create").hint("From current"),
        Choice::new(BranchAction::Update, "🔄 Update").hint("Pull main into current"),
        Choice::new(BranchAction::OpenPr, "🌐 Open PR").hint("View on GitHub"),
    ];
    let Some(action) = choose(session.prompt, "Branch Manager", &actions).into_result()? else {
        return Ok(());
    };

    match action {
        BranchAction::Switch => switch(session),
        BranchAction::Create => create(session),
        BranchAction::Update => {
            update_from_main(session);
            Ok(())
        }
        BranchAction::OpenPr => {
            open_pull_request(session);
            Ok(())
        }
    }
}

fn switch(session: &mut Session<'_>) -> Result<()> {
    let current = session.git.current_branch();
    let choices: Vec<Choice<String>> = session
        .git
        .local_branches()
        .into_iter()
        .filter(|branch| Some(branch.as_str()) != current.name())
        .map(|branch| Choice::new(branch.clone(), branch))
        .collect();
    if choices.is_empty() {
        ui::note("ℹ Info", "No other local branches.");
        return Ok(());
    }
    let Some(target) = choose(session.prompt, "Select Branch", &choices).into_result()? else {
        return Ok(());
    };

    let spinner = Spinner::start("Switching branches");
    match session.git.switch_branch(&target)? {
        SwitchOutcome::Switched { .. } => {
            info!(%target, "switched");
            spinner.stop(format!("✔ Switched to {target}"));
        }
        SwitchOutcome::CheckoutFailed { message, stashed } => {
            spinner.stop("✖ Checkout Failed");
            let mut body = message;
            if stashed {
                body.push_str("\nYour changes are kept in the stash.");
            }
            ui::note("Git Error", &body);
        }
        SwitchOutcome::RestoreConflict { .. } => {
            spinner.stop("⚠ Switched, but stash pop had conflicts.");
            ui::note("Conflict Alert", "Run 'git stash pop' manually to resolve.");
        }
    }
    Ok(())
}

fn create(session: &mut Session<'_>) -> Result<()> {
    let request = InputRequest::new("Branch Name").validate(validate_branch_name);
    let Some(name) = session.prompt.input(&request).into_result()? else {
        return Ok(());
    };
    match session.git.create_branch(&name) {
        Ok(()) => ui::note("✔ Created", &format!("Checked out to {name}")),
        Err(err) => ui::note("✖ Failed", &err.user_message()),
    }
    Ok(())
}

/// Rejects names git would refuse outright.
fn validate_branch_name(name: &str) -> std::result::Result<(), String> {
    if name.chars().any(char::is_whitespace) {
        return Err("Branch names cannot contain spaces".to_string());
    }
    if name.starts_with('-') {
        return Err("Branch names cannot start with '-'".to_string());
    }
    Ok(())
}

fn update_from_main(session: &Session<'_>) {
    let git = &session.git;
    let default = git.default_branch_name();
    let spinner = Spinner::start(format!("Fetching {default}"));
    let result = git.fetch_branch(&default).and_then(|()| {
        spinner.message("Pulling changes");
        git.pull(&default)
    });
    match result {
        Ok(()) => spinner.stop(format!("✔ Branch updated from {default}")),
        Err(err) => {
            spinner.stop("✖ Update Failed");
            ui::note("Git Error", &err.user_message());
        }
    }
}

fn open_pull_request(session: &Session<'_>) {
    let git = &session.git;
    let current = git.current_branch();
    let Some(branch) = current.name() else {
        ui::note("ℹ PR", &format!("Not on a branch ({current})."));
        return;
    };
    let Some(url) = git
        .remote_url()
        .and_then(|remote| pull_request_url(&remote, branch))
    else {
        ui::note("✖ PR", "Remote 'origin' is not a recognised git host.");
        return;
    };
    open_url(git.shell(), &url);
    ui::note("✔ PR", &format!("Opened PR in browser\n{url}"));
}
