//! Error types for Sketchwright operations.
//!
//! This module provides the main error type [`SketchError`]. Failures are
//! always caused by caller input or by the output sink; nothing here is
//! transient, so no operation retries.

use std::io;

use thiserror::Error;

use sketchwright_core::{color::ColorError, identifier::ElementId};

/// The main error type for Sketchwright operations.
///
/// A failed operation leaves the document exactly as it was before the call.
#[derive(Debug, Error)]
pub enum SketchError {
    /// An arrow endpoint does not exist in the document yet.
    #[error("element `{0}` not found")]
    ElementNotFound(ElementId),

    /// The request cannot be laid out, e.g. a routing layout without destinations.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<ColorError> for SketchError {
    fn from(err: ColorError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl SketchError {
    /// Create a new `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
