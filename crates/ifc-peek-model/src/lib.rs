// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC-Peek Model - shared types and viewer abstractions
//!
//! The 3D viewer (rendering, picking, clipping, IFC parsing) is an external
//! collaborator. This crate describes the part of its surface the application
//! consumes, so the UI logic can be written and tested against a trait rather
//! than against a concrete JavaScript library.
//!
//! # Architecture
//!
//! - [`IfcViewer`] - model loading, picking and property access
//! - [`Clipper`] - clipping plane management
//! - [`PropertyBag`] - the subset of entity properties shown to the user
//! - [`ViewerError`], [`LoadError`], [`DecodeError`] - error types
//!
//! # Example
//!
//! ```ignore
//! use ifc_peek_model::{IfcViewer, PickHit};
//!
//! async fn describe<V: IfcViewer>(viewer: &V) -> ifc_peek_model::Result<Option<String>> {
//!     let Some(hit) = viewer.pick(true).await? else {
//!         return Ok(None);
//!     };
//!     Ok(Some(viewer.ifc_type(hit).await?))
//! }
//! ```

pub mod error;
pub mod properties;
pub mod traits;
pub mod types;

pub use error::*;
pub use properties::*;
pub use traits::*;
pub use types::*;
