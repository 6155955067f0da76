// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! File load flow
//!
//! `Idle -> Loading -> {Loaded, Failed} -> Idle`. The shell is told about each
//! step through [`ShellAction`]s; the loading indicator is cleared on both
//! outcomes.

use crate::shell::ShellAction;
use ifc_peek_model::{IfcViewer, LoadError, ModelId};

/// Load a model and render its shadow
///
/// Shadow rendering runs after the load completes, not concurrently with it.
/// A failed shadow pass is logged and does not fail the load.
pub async fn load_model<V, F>(
    viewer: &V,
    source: V::Source,
    fit_to_frame: bool,
    dispatch: F,
) -> Result<ModelId, LoadError>
where
    V: IfcViewer + ?Sized,
    F: Fn(ShellAction),
{
    dispatch(ShellAction::LoadStarted);

    let model = match viewer.load(source, fit_to_frame).await {
        Ok(model) => model,
        Err(e) => {
            log::error!("Error loading the IFC file: {}", e);
            dispatch(ShellAction::LoadFailed(e.to_string()));
            return Err(e);
        }
    };

    if let Err(e) = viewer.render_shadow(model).await {
        log::warn!("Shadow rendering failed for {}: {}", model, e);
    }

    log::info!("Loaded {}", model);
    dispatch(ShellAction::LoadSucceeded(model));
    Ok(model)
}
