// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library Error Types
//!
//! Store operations never fail with these; they report failures as
//! outcomes. This type covers setup: opening storage and building clients.

use thiserror::Error;

use crate::api::ApiError;
use crate::storage::StorageError;

/// Unified error type for fallible setup paths.
#[derive(Error, Debug)]
pub enum ContactBookError {
    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// API client operation failed.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for setup operations.
pub type ContactBookResult<T> = Result<T, ContactBookError>;
