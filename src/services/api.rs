// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signup service API client.
//!
//! Handles:
//! - Fetching the full activity collection
//! - Signup and unregister mutations
//! - Mapping non-2xx `{detail}` bodies to user-presentable errors

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::ActivityCollection;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Signup service API client.
#[derive(Clone)]
pub struct SignupClient {
    http: reqwest::Client,
    base_url: String,
}

impl SignupClient {
    /// Create a new client for the service at the configured base URL.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Internal(e.into()))?;

        Ok(Self {
            http,
            base_url: config.service_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /activities - the full activity collection, in server order.
    pub async fn get_activities(&self) -> Result<ActivityCollection> {
        let url = format!("{}/activities", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        check_response_json(response).await
    }

    /// POST /activities/{name}/signup?email={email} - returns the server's
    /// success `message`.
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String> {
        self.mutate(activity, "signup", email).await
    }

    /// POST /activities/{name}/unregister?email={email} - same reply
    /// contract as signup.
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        self.mutate(activity, "unregister", email).await
    }

    async fn mutate(&self, activity: &str, action: &str, email: &str) -> Result<String> {
        // Activity names can contain spaces; both the path segment and the
        // query value go over the wire percent-encoded.
        let url = format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            urlencoding::encode(activity),
            action,
            urlencoding::encode(email),
        );

        let response = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let reply: MutationReply = check_response_json(response).await?;
        reply
            .message
            .ok_or_else(|| AppError::Parse("missing `message` in success reply".to_string()))
    }
}

/// Parse the JSON body, then check the status.
///
/// The body is read before the status check because even error replies are
/// expected to be JSON; a body that fails to parse is a [`AppError::Parse`]
/// regardless of status. A non-2xx body with a `detail` string becomes
/// [`AppError::Rejected`] carrying that text verbatim.
///
/// Success bodies deserialize straight from the text: map keys must reach
/// `T`'s deserializer in wire order, so the body never takes a detour
/// through an intermediate `Value`.
async fn check_response_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Transport(e.to_string()))?;

    if !status.is_success() {
        let body: Value =
            serde_json::from_str(&body).map_err(|e| AppError::Parse(e.to_string()))?;
        return Err(match body.get("detail").and_then(Value::as_str) {
            Some(detail) => AppError::Rejected(detail.to_string()),
            None => AppError::Status(status.as_u16()),
        });
    }

    serde_json::from_str(&body).map_err(|e| AppError::Parse(e.to_string()))
}

/// Success reply from a mutation endpoint.
#[derive(Debug, Deserialize)]
struct MutationReply {
    message: Option<String>,
}
