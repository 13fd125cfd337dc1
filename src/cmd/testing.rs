// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fakes shared by the flow tests.

use std::sync::{Arc, Mutex, PoisonError};

use futures_util::future::BoxFuture;

use super::Session;
use crate::config::Config;
use crate::core::process::fake::ScriptedRunner;
use crate::error::{NetworkError, OttoResult};
use crate::git::Git;
use crate::package::{Package, PackageManager};
use crate::prompt::script::ScriptedPrompt;
use crate::services::{CommitGenerator, CommitSuggestion, ReleaseEvent, TelemetrySink};

pub(crate) const IN_REPO: &str = "git rev-parse --is-inside-work-tree";

/// Generator returning a fixed suggestion, or failing when there is none.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeGenerator {
    suggestion: Option<CommitSuggestion>,
    pub(crate) diffs: Arc<Mutex<Vec<String>>>,
}

impl FakeGenerator {
    pub(crate) fn suggesting(msg: &str, desc: &str) -> Self {
        Self {
            suggestion: Some(CommitSuggestion {
                msg: msg.to_string(),
                desc: desc.to_string(),
            }),
            ..Self::default()
        }
    }

    pub(crate) fn failing() -> Self {
        Self::default()
    }
}

impl CommitGenerator for FakeGenerator {
    fn generate<'a>(&'a self, diff: &'a str) -> BoxFuture<'a, OttoResult<CommitSuggestion>> {
        self.diffs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diff.to_string());
        let result: OttoResult<CommitSuggestion> = self
            .suggestion
            .clone()
            .ok_or_else(|| {
                NetworkError::HttpError {
                    status: 503,
                    url: "https://api.openai.com/v1/chat/completions".to_string(),
                }
                .into()
            });
        Box::pin(async move { result })
    }
}

/// Sink keeping every event it receives.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSink {
    pub(crate) events: Arc<Mutex<Vec<ReleaseEvent>>>,
}

impl RecordingSink {
    pub(crate) fn events(&self) -> Vec<ReleaseEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TelemetrySink for RecordingSink {
    fn record<'a>(&'a self, event: &'a ReleaseEvent) -> BoxFuture<'a, ()> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
        Box::pin(async {})
    }
}

/// Runner that answers the repository probe with "true".
pub(crate) fn repo_runner() -> ScriptedRunner {
    let runner = ScriptedRunner::new();
    runner.ok(IN_REPO, "true");
    runner
}

/// Session over `runner` with npm and the given fakes.
pub(crate) fn session<'p>(
    runner: &ScriptedRunner,
    prompt: &'p mut ScriptedPrompt,
    generator: FakeGenerator,
    sink: RecordingSink,
) -> Session<'p> {
    let shell = runner.shell();
    Session {
        git: Git::new(shell.clone()),
        package: Package::new(shell, PackageManager::Npm),
        config: Config::default(),
        prompt,
        generator: Box::new(generator),
        telemetry: Box::new(sink),
    }
}

/// Session with a failing generator and a throwaway sink.
pub(crate) fn plain_session<'p>(
    runner: &ScriptedRunner,
    prompt: &'p mut ScriptedPrompt,
) -> Session<'p> {
    session(runner, prompt, FakeGenerator::failing(), RecordingSink::default())
}
