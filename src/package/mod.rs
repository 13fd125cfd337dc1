// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Node package manager commands.
//!
//! ```text
//! pnpm-lock.yaml present?  yes --> pnpm
//!                          no  --> npm
//!
//! install        <pm> install
//! build          <pm> run build
//! version bump   <pm> version <patch|minor|major>   (commit + tag)
//! ```

use clap::ValueEnum;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::info;

use crate::core::process::Shell;
use crate::error::OttoResult;

/// Lockfile that selects pnpm.
pub const PNPM_LOCKFILE: &str = "pnpm-lock.yaml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
}

impl PackageManager {
    /// pnpm if `dir` holds a pnpm lockfile, npm otherwise.
    #[must_use]
    pub fn detect(dir: &Path) -> Self {
        if dir.join(PNPM_LOCKFILE).is_file() {
            Self::Pnpm
        } else {
            Self::Npm
        }
    }

    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Semver component to bump, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VersionBump {
    #[default]
    Patch,
    Minor,
    Major,
    /// Leave the version alone.
    None,
}

impl VersionBump {
    /// Argument for `<pm> version`, `None` when no bump is wanted.
    #[must_use]
    pub const fn level(self) -> Option<&'static str> {
        match self {
            Self::Patch => Some("patch"),
            Self::Minor => Some("minor"),
            Self::Major => Some("major"),
            Self::None => None,
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.level().unwrap_or("none"))
    }
}

/// How much building happens before a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BuildMode {
    /// Install dependencies, then run the build script if declared.
    #[default]
    Full,
    /// Install dependencies only.
    Install,
    /// Neither.
    Skip,
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    scripts: BTreeMap<String, serde_json::Value>,
}

/// Whether `package.json` in `dir` declares a `build` script. A missing or
/// unreadable manifest has none.
#[must_use]
pub fn has_build_script(dir: &Path) -> bool {
    std::fs::read_to_string(dir.join("package.json"))
        .ok()
        .and_then(|content| serde_json::from_str::<Manifest>(&content).ok())
        .is_some_and(|manifest| manifest.scripts.contains_key("build"))
}

/// Package manager commands run through a [`Shell`].
#[derive(Debug, Clone)]
pub struct Package {
    shell: Shell,
    manager: PackageManager,
}

impl Package {
    #[must_use]
    pub const fn new(shell: Shell, manager: PackageManager) -> Self {
        Self { shell, manager }
    }

    /// Detect the package manager from the shell's working directory.
    #[must_use]
    pub fn detect(shell: Shell) -> Self {
        let manager = PackageManager::detect(shell.working_dir());
        Self::new(shell, manager)
    }

    #[must_use]
    pub const fn manager(&self) -> PackageManager {
        self.manager
    }

    #[must_use]
    pub fn has_build_script(&self) -> bool {
        has_build_script(self.shell.working_dir())
    }

    /// `<pm> install`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the install fails.
    pub fn install(&self) -> OttoResult<()> {
        info!(pm = %self.manager, "installing dependencies");
        self.shell.run(self.manager.program(), &["install"]).map(drop)
    }

    /// `<pm> run build`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the build script fails.
    pub fn build(&self) -> OttoResult<()> {
        info!(pm = %self.manager, "building");
        self.shell.run(self.manager.program(), &["run", "build"]).map(drop)
    }

    /// `<pm> version <level>`; a no-op for [`VersionBump::None`].
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the bump fails (dirty tree, existing tag).
    pub fn bump_version(&self, bump: VersionBump) -> OttoResult<()> {
        let Some(level) = bump.level() else {
            return Ok(());
        };
        info!(pm = %self.manager, level, "bumping version");
        self.shell.run(self.manager.program(), &["version", level]).map(drop)
    }
}

#[cfg(test)]
mod tests;
