//! Yew UI Components for IFC-Peek Viewer

mod about_dialog;
mod app_bar;
mod app_shell;
mod drawer;
mod loading_backdrop;
mod property_popover;
mod snackbar;
mod viewport;

pub use about_dialog::AboutDialog;
pub use app_bar::AppBar;
pub use app_shell::{App, AppProps};
pub use drawer::Drawer;
pub use loading_backdrop::LoadingBackdrop;
pub use property_popover::PropertyPopover;
pub use snackbar::Snackbar;
pub use viewport::Viewport;
