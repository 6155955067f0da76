// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for viewer operations and text decoding

use thiserror::Error;

/// Result type alias for viewer operations
pub type Result<T> = std::result::Result<T, ViewerError>;

/// A model file could not be loaded or parsed by the viewer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LoadError {
    /// String form of the underlying error as reported by the viewer
    pub message: String,
}

impl LoadError {
    /// Create a new load error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Malformed `\X2\...\X0\` payload in an IFC text value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Hex payload has an odd number of digits
    #[error("escape payload has odd length {0}")]
    OddLength(usize),

    /// Non-hex character inside the payload
    #[error("invalid hex digit {found:?} at offset {position}")]
    InvalidHex { position: usize, found: char },

    /// Byte count is not a whole number of UTF-16 code units
    #[error("{bytes} bytes do not form whole UTF-16 code units")]
    PartialCodeUnit { bytes: usize },
}

/// Errors that can occur while talking to the viewer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// Model load failed
    #[error("Failed to load model: {0}")]
    Load(#[from] LoadError),

    /// Hit test failed
    #[error("Pick failed: {0}")]
    Pick(String),

    /// Property lookup failed
    #[error("Property lookup failed: {0}")]
    Properties(String),

    /// Viewer has not been created yet
    #[error("Viewer is not ready")]
    NotReady,

    /// Exception thrown by the JavaScript side
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl ViewerError {
    /// Create a pick error
    pub fn pick(msg: impl Into<String>) -> Self {
        ViewerError::Pick(msg.into())
    }

    /// Create a property lookup error
    pub fn properties(msg: impl Into<String>) -> Self {
        ViewerError::Properties(msg.into())
    }

    /// Create a JavaScript error
    pub fn js(msg: impl Into<String>) -> Self {
        ViewerError::Js(msg.into())
    }
}
