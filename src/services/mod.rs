// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External HTTP collaborators of the release flow.

pub mod ai;
pub mod telemetry;


pub use ai::{CommitGenerator, CommitSuggestion, OpenAiGenerator};
pub use telemetry::{ReleaseEvent, TelemetrySink, WebhookSink};
