// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Peek Core - the logic behind the viewer UI
//!
//! Everything here is plain Rust with no browser dependency, so it runs and
//! is tested natively.
//!
//! # Features
//!
//! - **Escaped text decoding** of `\X2\...\X0\` runs in IFC strings
//! - **Inspector** state machine for double-click property popovers
//! - **Loader** flow for opening a model and reporting the outcome
//! - **Clipping** commands that read state back from the viewer
//! - **Locales** embedded at build time with browser-style language detection
//!
//! # Example
//!
//! ```
//! use ifc_peek_core::decode_ifc_text;
//!
//! assert_eq!(decode_ifc_text("\\X2\\58C1\\X0\\-001"), "壁-001");
//! ```

pub mod clipping;
pub mod config;
pub mod error;
pub mod inspector;
pub mod loader;
pub mod locale;
pub mod notify;
pub mod record;
pub mod shell;
mod text;

#[cfg(test)]
mod testing;

pub use config::{QueryOverrides, ViewerConfig, WebIfcSettings};
pub use error::{ConfigError, LocaleError};
pub use inspector::{Anchor, InspectOptions, Inspection, InspectorAction, PickCounter, PickTicket};
pub use locale::{Language, LanguageHints, Translations};
pub use notify::{Notification, NotificationKind};
pub use record::EntityPropertyRecord;
pub use shell::{ShellAction, ShellState};
pub use text::{decode_ifc_text, decode_optional, try_decode_ifc_text};
