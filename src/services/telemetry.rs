// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fire-and-forget release records.
//!
//! ```text
//! ReleaseEvent {user, branch, type, message, description}
//!      --> POST <webhook> (JSON)
//!      no URL    --> nothing sent
//!      any error --> logged at debug, dropped
//! ```

use futures_util::future::BoxFuture;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{NetworkError, OttoError};
use crate::net::{ensure_success, global_client};

/// One completed release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseEvent {
    pub user: String,
    pub branch: String,
    /// Version bump level, `none` for snapshots.
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub description: String,
}

/// Receives release records. Never fails.
pub trait TelemetrySink: Send + Sync {
    fn record<'a>(&'a self, event: &'a ReleaseEvent) -> BoxFuture<'a, ()>;
}

/// Posts events to a webhook such as a Google Apps Script endpoint.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    url: Option<String>,
    client: &'static Client,
}

impl WebhookSink {
    #[must_use]
    pub fn new(url: Option<String>) -> Self {
        Self {
            url,
            client: global_client(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.sheet_webhook_url.clone())
    }

    async fn post(&self, event: &ReleaseEvent) {
        let Some(url) = self.url.as_deref() else {
            return;
        };
        let result = self
            .client
            .post(url)
            .json(event)
            .send()
            .await
            .map_err(|err| OttoError::from(NetworkError::from(err)))
            .and_then(ensure_success);
        match result {
            Ok(_) => debug!(kind = %event.kind, "release recorded"),
            Err(err) => debug!(error = %err, "telemetry dropped"),
        }
    }
}

impl TelemetrySink for WebhookSink {
    fn record<'a>(&'a self, event: &'a ReleaseEvent) -> BoxFuture<'a, ()> {
        Box::pin(self.post(event))
    }
}
