// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation for otto-rs.

use super::Session;
use crate::error::Result;
use crate::ui::{self, Spinner};

/// Main handler for the build command.
///
/// # Errors
///
/// Never fails; install and build errors are reported on screen.
pub fn run_build_command(session: &Session<'_>) -> Result<()> {
    if !session.require_repository() {
        return Ok(());
    }
    let package = &session.package;
    let spinner = Spinner::start("📦 Installing dependencies...");
    if let Err(err) = package.install() {
        spinner.stop("✖ Build Failed");
        ui::note("Error", &err.user_message());
        return Ok(());
    }

    if !package.has_build_script() {
        spinner.stop("⚠ No build script found in package.json");
        ui::note("ℹ Tip", "Add a 'build' script to package.json to enable building.");
        return Ok(());
    }

    spinner.message("🛠️  Building project...");
    match package.build() {
        Ok(()) => {
            tracing::info!(pm = %package.manager(), "build complete");
            spinner.stop("✔ Build Complete");
        }
        Err(err) => {
            spinner.stop("✖ Build Failed");
            ui::note("Error", &err.user_message());
        }
    }
    Ok(())
}
