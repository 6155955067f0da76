// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewer configuration
//!
//! Defaults match the stock application. A JSON document can replace any
//! subset of fields, and a few fields can be overridden from the page URL
//! (`?debug=1&bg=f0f0f0&grid=0&axes=0`).

use crate::error::ConfigError;
use crate::locale::{DetectionSource, Language};
use serde::{Deserialize, Serialize};

/// Settings forwarded to the web-ifc loader
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebIfcSettings {
    /// Move the model so its first placement sits at the origin
    #[serde(rename = "COORDINATE_TO_ORIGIN")]
    pub coordinate_to_origin: bool,
    #[serde(rename = "USE_FAST_BOOLS")]
    pub use_fast_bools: bool,
}

impl Default for WebIfcSettings {
    fn default() -> Self {
        Self {
            coordinate_to_origin: true,
            use_fast_bools: false,
        }
    }
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    /// Scene background as 0xRRGGBB
    pub background_color: u32,
    pub show_axes: bool,
    pub show_grid: bool,
    pub web_ifc: WebIfcSettings,
    /// Frame the camera on a freshly loaded model
    pub fit_to_frame: bool,
    pub prefer_nearest_pick: bool,
    /// Ask the viewer for child entities when reading properties
    pub include_property_children: bool,
    pub snackbar_auto_hide_ms: u32,
    pub fallback_language: Language,
    pub detection_order: Vec<DetectionSource>,
    pub debug: bool,
    pub repository_url: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            background_color: 0xffffff,
            show_axes: true,
            show_grid: true,
            web_ifc: WebIfcSettings::default(),
            fit_to_frame: true,
            prefer_nearest_pick: true,
            include_property_children: false,
            snackbar_auto_hide_ms: 6000,
            fallback_language: Language::Ja,
            detection_order: DetectionSource::DEFAULT_ORDER.to_vec(),
            debug: false,
            repository_url: "https://github.com/s246wv/ifcjs-viewer-dev".to_string(),
        }
    }
}

/// URL overrides, already percent-decoded by the caller
///
/// Each field holds the raw value of its query parameter, or `None` when the
/// parameter is absent. A parameter given without a value is `Some("")`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryOverrides {
    pub debug: Option<String>,
    pub grid: Option<String>,
    pub axes: Option<String>,
    pub bg: Option<String>,
}

impl QueryOverrides {
    /// Build overrides from a parameter lookup such as `URLSearchParams.get`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            debug: lookup("debug"),
            grid: lookup("grid"),
            axes: lookup("axes"),
            bg: lookup("bg"),
        }
    }
}

impl ViewerConfig {
    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply URL overrides
    ///
    /// Values that do not parse are ignored.
    pub fn with_overrides(mut self, overrides: &QueryOverrides) -> Self {
        if let Some(debug) = overrides.debug.as_deref().and_then(parse_flag) {
            self.debug = debug;
        }
        if let Some(grid) = overrides.grid.as_deref().and_then(parse_flag) {
            self.show_grid = grid;
        }
        if let Some(axes) = overrides.axes.as_deref().and_then(parse_flag) {
            self.show_axes = axes;
        }
        if let Some(bg) = overrides.bg.as_deref() {
            match parse_colour(bg) {
                Ok(colour) => self.background_color = colour,
                Err(e) => log::warn!("Ignoring bg override: {}", e),
            }
        }
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse `RRGGBB`, `#RRGGBB` or `0xRRGGBB`
pub fn parse_colour(value: &str) -> Result<u32, ConfigError> {
    let hex = value
        .strip_prefix('#')
        .or_else(|| value.strip_prefix("0x"))
        .unwrap_or(value);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConfigError::Colour(value.to_string()));
    }
    u32::from_str_radix(hex, 16).map_err(|_| ConfigError::Colour(value.to_string()))
}
