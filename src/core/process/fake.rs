// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted [`CommandRunner`] for unit tests.
//!
//! Responses are keyed by the rendered command line (`git rev-parse HEAD`).
//! Several responses for the same command are served in order, the last one
//! repeating. Unscripted commands succeed with empty output.

use std::collections::{BTreeMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use super::output::ProcessOutput;
use super::runner::{CommandRunner, command_line};
use super::shell::Shell;
use crate::error::OttoResult;

#[derive(Debug, Default)]
struct Script {
    responses: BTreeMap<String, VecDeque<ProcessOutput>>,
    calls: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedRunner {
    script: Arc<Mutex<Script>>,
    cwd: PathBuf,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner reporting `cwd` as its working directory.
    pub fn in_dir(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            ..Self::default()
        }
    }

    /// Queue a response for `command`.
    pub fn on(&self, command: &str, output: ProcessOutput) -> &Self {
        self.lock()
            .responses
            .entry(command.to_string())
            .or_default()
            .push_back(output);
        self
    }

    pub fn ok(&self, command: &str, stdout: &str) -> &Self {
        self.on(command, ProcessOutput::ok(stdout))
    }

    pub fn fail(&self, command: &str, stderr: &str) -> &Self {
        self.on(command, ProcessOutput::failed(stderr))
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    /// Calls that start with `prefix`.
    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with(prefix))
            .collect()
    }

    pub fn shell(&self) -> Shell {
        Shell::new(Arc::new(self.clone()))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> OttoResult<ProcessOutput> {
        let line = command_line(program, args);
        let mut script = self.lock();
        script.calls.push(line.clone());
        let output = match script.responses.get_mut(&line) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap_or_default(),
            Some(queue) => queue.front().cloned().unwrap_or_default(),
            None => ProcessOutput::default(),
        };
        Ok(output)
    }

    fn working_dir(&self) -> &Path {
        &self.cwd
    }
}
