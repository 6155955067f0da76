// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory viewer used by the flow tests

use futures_util::future::{self, FutureExt, LocalBoxFuture};
use ifc_peek_model::{
    Clipper, IfcViewer, LoadError, ModelId, PickHit, PropertyBag, Result, ViewerError,
};
use std::cell::{Cell, RefCell};

/// Calls recorded by [`MockViewer`], in order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Load(String, bool),
    RenderShadow(ModelId),
    Pick(bool),
    PrePick,
    Properties(PickHit, bool),
    IfcType(PickHit),
    Toggle,
    DeleteAllPlanes,
    CreatePlane,
}

#[derive(Default)]
pub struct MockClipper {
    active: Cell<bool>,
    planes: Cell<usize>,
    calls: RefCell<Vec<Call>>,
}

impl MockClipper {
    pub fn planes(&self) -> usize {
        self.planes.get()
    }
}

impl Clipper for MockClipper {
    fn toggle(&self) {
        self.calls.borrow_mut().push(Call::Toggle);
        self.active.set(!self.active.get());
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn delete_all_planes(&self) {
        self.calls.borrow_mut().push(Call::DeleteAllPlanes);
        self.planes.set(0);
    }

    fn create_plane(&self) {
        self.calls.borrow_mut().push(Call::CreatePlane);
        self.planes.set(self.planes.get() + 1);
    }
}

/// Scripted viewer: answers come from the `*_result` fields
#[derive(Default)]
pub struct MockViewer {
    pub load_result: RefCell<Option<std::result::Result<ModelId, LoadError>>>,
    pub shadow_result: RefCell<Option<Result<()>>>,
    pub pick_result: RefCell<Option<Result<Option<PickHit>>>>,
    pub properties_result: RefCell<Option<PropertyBag>>,
    pub type_name: RefCell<String>,
    pub clipper: MockClipper,
    calls: RefCell<Vec<Call>>,
}

impl MockViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(model: ModelId) -> Self {
        let viewer = Self::new();
        viewer.load_result.replace(Some(Ok(model)));
        viewer
    }

    pub fn failing(message: &str) -> Self {
        let viewer = Self::new();
        viewer.load_result.replace(Some(Err(LoadError::new(message))));
        viewer
    }

    pub fn picking(hit: Option<PickHit>, type_name: &str, props: Option<PropertyBag>) -> Self {
        let viewer = Self::new();
        viewer.pick_result.replace(Some(Ok(hit)));
        viewer.type_name.replace(type_name.to_string());
        viewer.properties_result.replace(props);
        viewer
    }

    /// Every call so far, viewer and clipper interleaved by kind
    pub fn calls(&self) -> Vec<Call> {
        let mut calls = self.calls.borrow().clone();
        calls.extend(self.clipper.calls.borrow().iter().cloned());
        calls
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl IfcViewer for MockViewer {
    type Source = String;

    fn load(
        &self,
        source: String,
        fit_to_frame: bool,
    ) -> LocalBoxFuture<'_, std::result::Result<ModelId, LoadError>> {
        self.record(Call::Load(source, fit_to_frame));
        let result = self
            .load_result
            .borrow()
            .clone()
            .unwrap_or_else(|| Err(LoadError::new("no model scripted")));
        future::ready(result).boxed_local()
    }

    fn render_shadow(&self, model: ModelId) -> LocalBoxFuture<'_, Result<()>> {
        self.record(Call::RenderShadow(model));
        let result = self.shadow_result.borrow().clone().unwrap_or(Ok(()));
        future::ready(result).boxed_local()
    }

    fn pick(&self, prefer_nearest: bool) -> LocalBoxFuture<'_, Result<Option<PickHit>>> {
        self.record(Call::Pick(prefer_nearest));
        let result = self
            .pick_result
            .borrow()
            .clone()
            .unwrap_or(Err(ViewerError::NotReady));
        future::ready(result).boxed_local()
    }

    fn pre_pick(&self) {
        self.record(Call::PrePick);
    }

    fn properties(
        &self,
        hit: PickHit,
        include_children: bool,
    ) -> LocalBoxFuture<'_, Result<Option<PropertyBag>>> {
        self.record(Call::Properties(hit, include_children));
        future::ready(Ok(self.properties_result.borrow().clone())).boxed_local()
    }

    fn ifc_type(&self, hit: PickHit) -> LocalBoxFuture<'_, Result<String>> {
        self.record(Call::IfcType(hit));
        future::ready(Ok(self.type_name.borrow().clone())).boxed_local()
    }

    fn clipper(&self) -> &dyn Clipper {
        &self.clipper
    }
}
