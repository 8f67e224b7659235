//! Unified error handling for the stackignore library.
//!
//! This module provides an error hierarchy using `thiserror` for better
//! programmatic error handling and more informative error messages.
//!
//! ## Error Categories
//!
//! - [`ScanError`]: Errors from scanning the target directory (fatal)
//! - [`FetchError`]: Errors from remote template providers (recoverable,
//!   converted into fallback behavior by the generator)
//! - [`WriteError`]: Errors writing the final ignore file (fatal)
//!
//! ## Example
//!
//! ```rust,no_run
//! use stackignore::error::{StackignoreError, FetchError};
//!
//! fn example() -> Result<(), StackignoreError> {
//!     // Errors are automatically converted via From trait
//!     Err(FetchError::NotFound {
//!         template: "Node".to_string(),
//!     })?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the stackignore library.
#[derive(Error, Debug)]
pub enum StackignoreError {
    /// An error occurred while scanning the target directory.
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// An error occurred while fetching a remote template.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// An error occurred while writing the ignore file.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    /// A generic error for cases not covered by specific error types.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Errors that can occur while scanning the target directory.
///
/// Scan failures are fatal: without a directory listing there is nothing to
/// detect stacks from.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The target directory does not exist.
    #[error("Directory does not exist: {path}")]
    NotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The target path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory {
        /// Path that was expected to be a directory.
        path: PathBuf,
    },

    /// Reading the directory failed.
    #[error("Failed to read directory {path}: {source}")]
    ReadFailed {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that can occur when fetching templates from remote providers.
///
/// These are recoverable per the fallback design: a per-identifier failure
/// defers that identifier to the next tier, and a whole-batch failure
/// escalates to the next tier.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The provider has no template for this name (404 or unmapped).
    #[error("Template not found: {template}")]
    NotFound {
        /// Template name that was not found.
        template: String,
    },

    /// The provider returned a non-success status.
    #[error("Provider returned status {status} for {template}")]
    BadStatus {
        /// HTTP status code.
        status: u16,
        /// Template name or batch description that was requested.
        template: String,
    },

    /// The provider returned an empty body.
    #[error("Empty response for {template}")]
    EmptyResponse {
        /// Template name or batch description that was requested.
        template: String,
    },

    /// The provider returned an error payload in the response body.
    #[error("Provider error payload: {message}")]
    ErrorPayload {
        /// The error text reported by the provider.
        message: String,
    },

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors that can occur while writing the final ignore file.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Writing the file failed (permissions, missing parent, etc.).
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Type alias for Results using StackignoreError.
///
/// Note: This is not re-exported from the crate root to avoid shadowing
/// `anyhow::Result`. Use explicitly as `error::Result<T>` when needed.
pub type StackignoreResult<T> = std::result::Result<T, StackignoreError>;
