//! Global state management for the IFC viewer
//!
//! Uses Yew's reducer pattern for predictable state updates. The transitions
//! themselves live in `ifc-peek-core`; the stores here only adapt them to
//! [`Reducible`].

use crate::bridge::WebViewer;
use derive_more::{Deref, From};
use ifc_peek_core::{Inspection, InspectorAction, ShellAction, ShellState, Translations, ViewerConfig};
use std::rc::Rc;
use yew::prelude::*;

/// Shell state store
#[derive(Clone, Debug, Default, PartialEq, Deref, From)]
pub struct ShellStore(ShellState);

impl Reducible for ShellStore {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Inspector state store
#[derive(Clone, Debug, Default, PartialEq, Deref, From)]
pub struct InspectorStore(Inspection);

impl Reducible for InspectorStore {
    type Action = InspectorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Hook to use shell state
#[hook]
pub fn use_shell_state() -> UseReducerHandle<ShellStore> {
    use_reducer(ShellStore::default)
}

/// Hook to use inspector state
#[hook]
pub fn use_inspector_state() -> UseReducerHandle<InspectorStore> {
    use_reducer(InspectorStore::default)
}

/// Context type for shell state
pub type ShellContext = UseReducerHandle<ShellStore>;

/// Shared handle to the live viewer
///
/// Compared by identity: two handles are equal when they point at the same
/// viewer instance.
#[derive(Clone, Deref)]
pub struct ViewerHandle(pub Rc<WebViewer>);

impl PartialEq for ViewerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Context type for the viewer, `None` until the scene is created
pub type ViewerContext = Option<ViewerHandle>;

/// Read-only application context
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub config: Rc<ViewerConfig>,
    pub translations: Rc<Translations>,
}

impl AppContext {
    pub fn new(config: ViewerConfig, translations: Translations) -> Self {
        Self {
            config: Rc::new(config),
            translations: Rc::new(translations),
        }
    }

    /// Translated text for `key`
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.t(key)
    }
}
