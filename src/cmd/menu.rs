// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Main menu loop.

use tracing::warn;

use super::{Flow, Session, run_flow};
use crate::cli::release::ReleaseArgs;
use crate::error::{Result, is_aborted};
use crate::prompt::{Choice, choose};
use crate::ui;

fn menu_choices() -> [Choice<Option<Flow>>; 8] {
    [
        Choice::new(Some(Flow::Release), "🚀 Release").hint("Build, Tag, Push"),
        Choice::new(Some(Flow::Build), "🔨 Build").hint("Install & Build"),
        Choice::new(Some(Flow::Branch), "🌿 Branch").hint("Switch, Update, PR"),
        Choice::new(Some(Flow::Stash), "📦 Stash").hint("Save & Pop Changes"),
        Choice::new(Some(Flow::Undo), "⏪ Rollback").hint("Rollback Commits"),
        Choice::new(Some(Flow::Sync), "🔄 Sync").hint("Fetch & Pull latest"),
        Choice::new(Some(Flow::Settings), "⚙️ Settings"),
        Choice::new(None, "🚪 Quit"),
    ]
}

/// Offer flows until the user quits.
///
/// A flow error is shown and the loop continues.
///
/// # Errors
///
/// Returns `OttoError::Aborted` if a prompt is aborted.
pub async fn run_menu(session: &mut Session<'_>) -> Result<()> {
    let choices = menu_choices();
    loop {
        let Some(Some(flow)) = choose(session.prompt, "What's the plan?", &choices).into_result()?
        else {
            ui::outro("👋 Bye!");
            return Ok(());
        };

        if let Err(err) = run_flow(session, flow, &ReleaseArgs::default()).await {
            if is_aborted(&err) {
                return Err(err);
            }
            warn!(?flow, error = %err, "flow failed");
            ui::note("⚠ Unexpected Error", &format!("{err:#}"));
        }
        ui::blank();
    }
}
