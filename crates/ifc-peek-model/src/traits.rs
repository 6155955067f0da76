// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewer traits
//!
//! These traits describe the external 3D viewer as the application sees it.
//! Everything runs on a single-threaded event loop, so futures are local
//! (`!Send`) and methods take `&self`: the viewer is a shared handle and
//! implementations use interior mutability where they need it.

use crate::{LoadError, ModelId, PickHit, PropertyBag, Result};
use futures_util::future::LocalBoxFuture;

/// Clipping plane management
pub trait Clipper {
    /// Toggle clipping on or off
    fn toggle(&self);

    /// Whether clipping is currently active, as reported by the viewer
    fn is_active(&self) -> bool;

    /// Remove every clipping plane
    fn delete_all_planes(&self);

    /// Create a clipping plane at the current pointer location
    fn create_plane(&self);
}

/// Main viewer interface
///
/// # Example
///
/// ```ignore
/// use ifc_peek_model::IfcViewer;
///
/// async fn open<V: IfcViewer>(viewer: &V, file: V::Source) {
///     if let Ok(model) = viewer.load(file, true).await {
///         let _ = viewer.render_shadow(model).await;
///     }
/// }
/// ```
pub trait IfcViewer {
    /// What a model is loaded from (a browser `File` on the web)
    type Source;

    /// Load and parse a model
    ///
    /// # Arguments
    /// * `source` - The file to load
    /// * `fit_to_frame` - Move the camera so the whole model is visible
    fn load(&self, source: Self::Source, fit_to_frame: bool)
        -> LocalBoxFuture<'_, std::result::Result<ModelId, LoadError>>;

    /// Render the drop shadow of a loaded model
    fn render_shadow(&self, model: ModelId) -> LocalBoxFuture<'_, Result<()>>;

    /// Hit-test the entity under the pointer
    ///
    /// Returns `Ok(None)` when nothing is under the cursor.
    fn pick(&self, prefer_nearest: bool) -> LocalBoxFuture<'_, Result<Option<PickHit>>>;

    /// Highlight the entity under the pointer without selecting it
    fn pre_pick(&self);

    /// Attributes of an entity
    ///
    /// Returns `Ok(None)` when the viewer has no properties for the entity.
    fn properties(
        &self,
        hit: PickHit,
        include_children: bool,
    ) -> LocalBoxFuture<'_, Result<Option<PropertyBag>>>;

    /// IFC type name of an entity (e.g. `IFCSLAB`)
    fn ifc_type(&self, hit: PickHit) -> LocalBoxFuture<'_, Result<String>>;

    /// Clipping plane controls
    fn clipper(&self) -> &dyn Clipper;
}
