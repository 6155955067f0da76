// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for configuration and locale loading

use thiserror::Error;

/// Invalid viewer configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid colour {0:?}, expected 6 hex digits")]
    Colour(String),
}

/// Locale table could not be read
#[derive(Error, Debug)]
#[error("Invalid locale table for {language}: {source}")]
pub struct LocaleError {
    pub language: &'static str,
    #[source]
    pub source: serde_json::Error,
}
