// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release command arguments.
//!
//! Every option left out is asked interactively.

use clap::Args;

use crate::git::PushMode;
use crate::package::{BuildMode, VersionBump};

/// Arguments for the `release` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ReleaseArgs {
    /// Version bump (`none` for a snapshot release).
    #[arg(short = 'b', long = "bump", value_enum, value_name = "LEVEL")]
    pub bump: Option<VersionBump>,

    /// How much to build before committing.
    #[arg(long = "build", value_enum, value_name = "MODE")]
    pub build: Option<BuildMode>,

    /// Push mode.
    #[arg(short = 'p', long = "push", value_enum, value_name = "MODE")]
    pub push: Option<PushMode>,

    /// Skips the final "Start Release?" confirmation.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}
