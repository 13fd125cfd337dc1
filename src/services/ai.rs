// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit message suggestions from an OpenAI-compatible chat endpoint.
//!
//! ```text
//! staged diff --truncate 15k chars--> prompt
//!      --> POST {base}/chat/completions  (response_format: json_object)
//!      --> choices[0].message.content = {"msg": "...", "desc": "..."}
//!      --> CommitSuggestion (missing fields = "")
//! ```

use futures_util::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{NetworkError, OttoResult};
use crate::net::{ensure_success, global_client};
use crate::ui::text::truncate_chars;

/// Longest diff sent to the model, in characters.
pub const MAX_DIFF_CHARS: usize = 15_000;

const PROMPT_PREFIX: &str = "Analyze diff, return JSON with \"msg\" (conventional commit) and \"desc\" (technical summary):\n";

/// Suggested commit subject and longer description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitSuggestion {
    pub msg: String,
    pub desc: String,
}

impl CommitSuggestion {
    /// Read `{"msg", "desc"}` from model output. Anything malformed or
    /// missing becomes an empty string.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        let value: Value = serde_json::from_str(content).unwrap_or(Value::Null);
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .trim()
                .to_string()
        };
        Self {
            msg: field("msg"),
            desc: field("desc"),
        }
    }
}

/// Produces a commit suggestion for a staged diff.
pub trait CommitGenerator: Send + Sync {
    fn generate<'a>(&'a self, diff: &'a str) -> BoxFuture<'a, OttoResult<CommitSuggestion>>;
}

/// Prompt sent for `diff`.
#[must_use]
pub fn build_prompt(diff: &str) -> String {
    format!("{PROMPT_PREFIX}{}", truncate_chars(diff, MAX_DIFF_CHARS))
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChatChoiceMessage>,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    client: &'static Client,
}

impl OpenAiGenerator {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            endpoint: format!("{}/chat/completions", config.openai_base_url),
            client: global_client(),
        }
    }

    async fn request(&self, diff: &str) -> OttoResult<CommitSuggestion> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(NetworkError::MissingCredential("OPENAI_API_KEY"))?;

        let prompt = build_prompt(diff);
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: &prompt,
            }],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };
        debug!(model = %self.model, chars = prompt.len(), "requesting commit message");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(NetworkError::from)?;
        let body: ChatResponse = ensure_success(response)?
            .json()
            .await
            .map_err(NetworkError::from)?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default();
        Ok(CommitSuggestion::from_content(&content))
    }
}

impl CommitGenerator for OpenAiGenerator {
    fn generate<'a>(&'a self, diff: &'a str) -> BoxFuture<'a, OttoResult<CommitSuggestion>> {
        Box::pin(self.request(diff))
    }
}
