// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronous process execution, the single boundary to git and the
//! package manager.
//!
//! ```text
//! Shell::run / run_or_empty (program, args)
//!       |
//!       v
//!  dyn CommandRunner            tests: ScriptedRunner (canned text)
//!       |
//!       v
//!  SystemRunner --> std::process::Command (cwd, null stdin, piped out/err)
//!       |
//!       v
//!  ProcessOutput { exit_code, stdout, stderr }
//!       |
//!       v
//!  trimmed stdout | GitError/ProcessError::CommandFailed | "" (lenient)
//! ```
//!
//! Arguments are passed as a vector, never through a shell, so commit
//! messages and branch names need no quoting.

mod output;
mod runner;
mod shell;

#[cfg(test)]
pub mod fake;

pub use output::ProcessOutput;
pub use runner::{CommandRunner, SystemRunner};
pub use shell::Shell;
