// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::output::ProcessOutput;
use super::runner::{CommandRunner, SystemRunner, command_line};
use crate::error::{GitError, OttoError, OttoResult, ProcessError};

/// Failure policy on top of a [`CommandRunner`].
///
/// `run` turns a non-zero exit into `CommandFailed` carrying the tool's own
/// error text; `run_or_empty` swallows every failure and yields `""`.
#[derive(Clone)]
pub struct Shell {
    runner: Arc<dyn CommandRunner>,
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("cwd", &self.runner.working_dir())
            .finish()
    }
}

impl Shell {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Shell running real processes in `cwd`.
    pub fn system(cwd: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(SystemRunner::new(cwd)))
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        self.runner.working_dir()
    }

    /// Run a command and return its trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` (for git) or
    /// `ProcessError::CommandFailed` (anything else) on a non-zero exit, and
    /// the runner's error if the program could not be started.
    pub fn run(&self, program: &str, args: &[&str]) -> OttoResult<String> {
        let output = self.runner.run(program, args)?;
        if output.success() {
            return Ok(output.stdout().trim().to_string());
        }
        Err(failure(program, args, &output))
    }

    /// Run a command, returning `""` on any failure.
    #[must_use]
    pub fn run_or_empty(&self, program: &str, args: &[&str]) -> String {
        match self.run(program, args) {
            Ok(stdout) => stdout,
            Err(err) => {
                debug!(cmd = %command_line(program, args), error = %err, "ignored failure");
                String::new()
            }
        }
    }

    /// `git <args>`, failing on non-zero exit.
    ///
    /// # Errors
    ///
    /// See [`Shell::run`].
    pub fn git(&self, args: &[&str]) -> OttoResult<String> {
        self.run("git", args)
    }

    /// `git <args>`, empty string on failure.
    #[must_use]
    pub fn git_or_empty(&self, args: &[&str]) -> String {
        self.run_or_empty("git", args)
    }
}

fn failure(program: &str, args: &[&str], output: &ProcessOutput) -> OttoError {
    let command = command_line(program, args);
    let message = output.failure_message();
    if program == "git" {
        GitError::CommandFailed { command, message }.into()
    } else {
        ProcessError::CommandFailed { command, message }.into()
    }
}
