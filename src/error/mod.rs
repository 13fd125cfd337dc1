// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            OttoError (~16 bytes)
//!                    |
//!   +-------+------+-+------+-------+
//!   |       |      |        |       |
//!   v       v      v        v       v
//! Aborted  Git  Process  Config  Network
//!          Box    Box      Box     Box
//!
//! Sub-errors:
//!   Git      CommandFailed, NoLocalChanges
//!   Process  ExecutableNotFound, SpawnFailed, CommandFailed
//!   Config   ReadError, ParseError, WriteError
//!   Network  Reqwest, HttpError, MissingCredential
//! ```
//!
//! Flow code works with [`Result`] (anyhow) and `.context()`, the git and
//! process layers return [`OttoResult`] so callers can match on variants.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`OttoError`].
pub type OttoResult<T> = std::result::Result<T, OttoError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~16 bytes on the stack.
#[derive(Debug, Error)]
pub enum OttoError {
    /// The user aborted an interactive prompt (Ctrl-C or closed terminal).
    #[error("aborted by user")]
    Aborted,

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),
}

impl OttoError {
    /// Returns the git error if this is one.
    #[must_use]
    pub fn as_git(&self) -> Option<&GitError> {
        match self {
            Self::Git(err) => Some(err),
            _ => None,
        }
    }

    /// Text suitable for showing to the user: the external tool's own error
    /// output when there is one, the full message otherwise.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Git(err) => match err.as_ref() {
                GitError::CommandFailed { message, .. } => message.clone(),
                other => other.to_string(),
            },
            other => other.to_string(),
        }
    }
}

/// Returns true if the error chain contains [`OttoError::Aborted`].
#[must_use]
pub fn is_aborted(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| matches!(cause.downcast_ref::<OttoError>(), Some(OttoError::Aborted)))
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for OttoError {
                fn from(err: $error) -> Self {
                    OttoError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ProcessError => Process,
    ConfigError => Config,
    NetworkError => Network,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command exited with a non-zero status.
    ///
    /// `message` holds the command's error output, or a synthesized exit
    /// status description when it printed nothing.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Stash requested on a clean working tree.
    #[error("No local changes to stash")]
    NoLocalChanges,
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A non-git tool exited with a non-zero status.
    #[error("'{command}' failed: {message}")]
    CommandFailed { command: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// A credential required for the request is not configured.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
}
