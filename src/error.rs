// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type for the signup service client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The service rejected the request and supplied a `detail` message.
    /// The message is surfaced to the user verbatim.
    #[error("{0}")]
    Rejected(String),

    /// Non-2xx response with no usable `detail` field.
    #[error("signup service returned HTTP {0}")]
    Status(u16),

    /// Network-level failure (connection refused, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Parse(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True when the service itself rejected the request (as opposed to the
    /// request never producing a readable reply).
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Rejected(_) | AppError::Status(_))
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, AppError>;
