// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API error types.

use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}: {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// `message` field of the error payload, if any.
        message: Option<String>,
    },

    /// No response could be obtained.
    #[error("transport error: {0}")]
    Transport(String),

    /// A 2xx response carried a body that could not be decoded.
    #[error("unreadable response: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("client error: {0}")]
    Client(String),
}

impl ApiError {
    /// Convenience constructor for a rejection with a message.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status,
            message: Some(message.into()),
        }
    }

    /// Returns the server-supplied message of a rejection, if non-empty.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Returns the HTTP status of a rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server answered at all.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;
