// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for otto-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! otto [global options]            interactive menu
//! otto [global options] <command>  banner, update check, one flow
//!   release [--bump L] [--build M] [--push M] [-y]
//!   build | branch | stash | undo | sync | settings
//! ```

pub mod global;
pub mod release;


use crate::cli::global::GlobalOptions;
use crate::cli::release::ReleaseArgs;
use clap::{Parser, Subcommand};

/// Otto - guided git release assistant
///
/// Walks a Node.js project through build, commit, version bump and push.
#[derive(Debug, Parser)]
#[command(
    name = "otto",
    author,
    version,
    about = "Guided git release assistant",
    long_about = "otto-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Run `otto` without a command for the interactive menu, or\n\
                  `otto <command>` to run a single flow and exit.",
    after_help = "SETTINGS:\n\n\
                  The OpenAI key and the Google Sheets webhook are read from\n\
                  <config dir>/otto/config.json, a .env file in the current\n\
                  directory and the OPENAI_API_KEY / GOOGLE_SHEET_WEBHOOK_URL\n\
                  environment variables, later sources winning."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Flow to run; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build, commit, bump the version and push.
    Release(ReleaseArgs),

    /// Installs dependencies and runs the build script.
    Build,

    /// Switches, creates or updates branches, opens a pull request.
    Branch,

    /// Saves or pops stashed changes.
    Stash,

    /// Resets the current branch to a recent commit.
    #[command(visible_alias = "rollback")]
    Undo,

    /// Fetches and pulls the current branch from origin.
    Sync,

    /// Edits the OpenAI key and the Google Sheets webhook.
    Settings,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
