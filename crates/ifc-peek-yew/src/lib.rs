//! IFC-Peek Yew UI Components
//!
//! Application shell, viewport and property popover for the IFC-Peek viewer,
//! plus the bindings to the web-ifc-viewer scene they drive.

pub mod bridge;
pub mod components;
pub mod logging;
pub mod state;
pub mod utils;

// Re-exports
pub use bridge::WebViewer;
pub use components::*;
pub use state::{use_inspector_state, use_shell_state, AppContext, ViewerHandle};
