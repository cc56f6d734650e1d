// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types shared across the crate.

use thiserror::Error;

/// Failure reading or writing device-local storage.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O error on key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure talking to the hosted auth service.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please enter both email and password")]
    MissingCredentials,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Auth backend is not configured")]
    NotConfigured,

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}
