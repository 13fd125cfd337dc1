// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive flows.
//!
//! ```text
//! main --> Session { git, package, config, prompt, generator, telemetry }
//!            |
//!            +--> updates::check_for_updates   (once per start)
//!            +--> menu::run_menu               (no subcommand)
//!            +--> run_flow(Flow)               (subcommand or menu pick)
//!                   release | build | branch | stash | undo | sync | settings
//! ```
//!
//! Flows print their own results. They return `Err` only for failures that
//! escape every step (including [`OttoError::Aborted`](crate::error::OttoError)).

pub mod branch;
pub mod build;
pub mod menu;
pub mod release;
pub mod settings;
pub mod stash;
pub mod sync;
pub mod undo;
pub mod updates;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;

use crate::cli::release::ReleaseArgs;
use crate::config::Config;
use crate::core::process::Shell;
use crate::error::Result;
use crate::git::Git;
use crate::package::Package;
use crate::prompt::Prompt;
use crate::services::{CommitGenerator, OpenAiGenerator, TelemetrySink, WebhookSink};
use crate::ui::{self, Banner};

/// Everything a flow needs for one run of the program.
pub struct Session<'p> {
    pub git: Git,
    pub package: Package,
    pub config: Config,
    pub prompt: &'p mut dyn Prompt,
    pub generator: Box<dyn CommitGenerator>,
    pub telemetry: Box<dyn TelemetrySink>,
}

impl<'p> Session<'p> {
    /// Session over `shell`, with HTTP services built from `config`.
    pub fn new(shell: Shell, config: Config, prompt: &'p mut dyn Prompt) -> Self {
        Self {
            git: Git::new(shell.clone()),
            package: Package::detect(shell),
            generator: Box::new(OpenAiGenerator::from_config(&config)),
            telemetry: Box::new(WebhookSink::from_config(&config)),
            config,
            prompt,
        }
    }

    /// Replace the HTTP services.
    #[must_use]
    pub fn with_services(
        mut self,
        generator: Box<dyn CommitGenerator>,
        telemetry: Box<dyn TelemetrySink>,
    ) -> Self {
        self.generator = generator;
        self.telemetry = telemetry;
        self
    }

    /// Rebuild the HTTP services after the configuration changed.
    pub fn refresh_services(&mut self) {
        self.generator = Box::new(OpenAiGenerator::from_config(&self.config));
        self.telemetry = Box::new(WebhookSink::from_config(&self.config));
    }

    #[must_use]
    pub fn banner(&self) -> Banner {
        Banner::collect(&self.git, self.package.manager(), &self.config)
    }

    pub fn print_banner(&self) {
        self.banner().print();
    }

    /// Show the standard notice and return false outside a repository.
    fn require_repository(&self) -> bool {
        if self.git.is_repository() {
            return true;
        }
        ui::note("Error", "Not a git repository.");
        false
    }
}

/// Whether the program keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// A single flow, picked from the menu or named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Release,
    Build,
    Branch,
    Stash,
    Undo,
    Sync,
    Settings,
}

/// Run one flow to completion.
///
/// # Errors
///
/// Returns an error if the user aborts a prompt or a step fails in a way
/// the flow does not report itself.
pub async fn run_flow(session: &mut Session<'_>, flow: Flow, release: &ReleaseArgs) -> Result<()> {
    tracing::debug!(?flow, "running flow");
    match flow {
        Flow::Release => release::run_release_command(session, release).await,
        Flow::Build => build::run_build_command(session),
        Flow::Branch => branch::run_branch_command(session),
        Flow::Stash => stash::run_stash_command(session),
        Flow::Undo => undo::run_undo_command(session),
        Flow::Sync => sync::run_sync_command(session),
        Flow::Settings => settings::run_settings_command(session),
    }
}
