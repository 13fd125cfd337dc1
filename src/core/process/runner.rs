// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process spawning.
//!
//! ```text
//! SystemRunner::run(program, args)
//!        |
//!        v
//!   resolve program (which, cached)
//!        |
//!        v
//!   Command: cwd, stdin=null, stdout/stderr piped
//!        |
//!        v
//!   ProcessOutput (non-zero exit is NOT an error here)
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{OnceLock, RwLock};
use tracing::{debug, trace};

use super::output::ProcessOutput;
use crate::error::{OttoResult, ProcessError};

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

/// Executes an external program and reports how it exited.
///
/// Implementations must not treat a non-zero exit as an error; that policy
/// belongs to [`super::Shell`]. An `Err` means the program could not be run
/// at all.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the executable cannot be found or spawned.
    fn run(&self, program: &str, args: &[&str]) -> OttoResult<ProcessOutput>;

    /// Directory the commands run in.
    fn working_dir(&self) -> &Path;
}

/// Runs real processes in a fixed working directory.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    cwd: PathBuf,
}

impl SystemRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Resolve a program through PATH, caching the result.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if the program is not in PATH.
    pub fn resolve(program: &str) -> std::result::Result<PathBuf, ProcessError> {
        {
            let cache = exe_cache()
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(path) = cache.get(program) {
                return Ok(path.clone());
            }
        }

        let path = which::which(program).map_err(|_| ProcessError::ExecutableNotFound {
            name: program.to_string(),
        })?;

        exe_cache()
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(program.to_string(), path.clone());
        Ok(path)
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> OttoResult<ProcessOutput> {
        let command_line = command_line(program, args);
        debug!(cwd = %self.cwd.display(), cmd = %command_line, "exec");

        let path = Self::resolve(program)?;
        let mut command = Command::new(path);
        command.args(args).current_dir(&self.cwd).stdin(Stdio::null());
        if program == "git" {
            // stdin is closed, so a credential prompt would hang forever.
            command
                .env("GIT_TERMINAL_PROMPT", "0")
                .env("GCM_INTERACTIVE", "never");
        }
        let output = command
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        let result = ProcessOutput::new(
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        );
        trace!(cmd = %command_line, exit_code = result.exit_code(), "completed");
        Ok(result)
    }

    fn working_dir(&self) -> &Path {
        &self.cwd
    }
}

/// Render a command for logs and error messages.
#[must_use]
pub(super) fn command_line(program: &str, args: &[&str]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.contains(' ') {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}
