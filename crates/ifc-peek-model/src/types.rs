// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identifier types shared between the UI and the viewer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a model loaded into the viewer
///
/// The model itself is owned by the viewer; this is an opaque handle.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct ModelId(pub u32);

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model {}", self.0)
    }
}

impl From<u32> for ModelId {
    fn from(id: u32) -> Self {
        ModelId(id)
    }
}

/// Express ID of an entity inside one model (e.g. #123 becomes ExpressId(123))
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct ExpressId(pub u32);

impl fmt::Display for ExpressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for ExpressId {
    fn from(id: u32) -> Self {
        ExpressId(id)
    }
}

/// Entity under the cursor, as reported by a successful pick
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct PickHit {
    #[serde(rename = "modelID")]
    pub model: ModelId,
    #[serde(rename = "id")]
    pub entity: ExpressId,
}

impl PickHit {
    pub fn new(model: impl Into<ModelId>, entity: impl Into<ExpressId>) -> Self {
        Self {
            model: model.into(),
            entity: entity.into(),
        }
    }
}

impl fmt::Display for PickHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.entity, self.model)
    }
}
