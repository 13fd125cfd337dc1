// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared HTTP client.
//!
//! ```text
//! global_client()  OnceLock, connection pool, keep-alive
//!      |
//!      +--> services::ai         POST {base}/chat/completions
//!      +--> services::telemetry  POST <webhook>
//! ```

use reqwest::{Client, Response};
use std::sync::OnceLock;
use std::time::Duration;

use crate::error::{NetworkError, OttoResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Global HTTP client - initialized once, reused for every request.
/// Falls back to a basic client if custom configuration fails.
pub fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("otto-rs/{}", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Turn a non-2xx response into `NetworkError::HttpError`.
///
/// # Errors
///
/// Returns `NetworkError::HttpError` with the status code and URL.
pub fn ensure_success(response: Response) -> OttoResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(NetworkError::HttpError {
        status: status.as_u16(),
        url: response.url().to_string(),
    }
    .into())
}
