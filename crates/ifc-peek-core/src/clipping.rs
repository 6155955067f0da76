// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clipping plane commands
//!
//! The viewer owns clipping state. After a toggle the active flag is read
//! back from it rather than flipped locally.

use crate::shell::ShellAction;
use ifc_peek_model::IfcViewer;

/// Toggle clipping and report the state the viewer ends up in
pub fn toggle_clipping<V, F>(viewer: &V, dispatch: F) -> bool
where
    V: IfcViewer + ?Sized,
    F: Fn(ShellAction),
{
    let clipper = viewer.clipper();
    clipper.toggle();
    let active = clipper.is_active();
    log::debug!("Clipping {}", if active { "on" } else { "off" });
    dispatch(ShellAction::ClippingReported(active));
    active
}

/// Replace all clipping planes with one plane at the pointer
pub fn place_plane<V: IfcViewer + ?Sized>(viewer: &V) {
    let clipper = viewer.clipper();
    clipper.delete_all_planes();
    clipper.create_plane();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::ShellState;
    use crate::testing::{Call, MockViewer};
    use std::cell::RefCell;

    #[test]
    fn test_double_toggle_restores_highlight() {
        let viewer = MockViewer::new();
        let state = RefCell::new(ShellState::default());
        let dispatch = |action| state.borrow_mut().apply(action);

        let before = state.borrow().clipping_active;
        assert!(toggle_clipping(&viewer, dispatch));
        assert!(state.borrow().clipping_active);
        assert!(!toggle_clipping(&viewer, dispatch));
        assert_eq!(state.borrow().clipping_active, before);
    }

    #[test]
    fn test_highlight_follows_viewer() {
        let viewer = MockViewer::new();
        // viewer already active before the UI ever toggled
        viewer.clipper().toggle();
        let state = RefCell::new(ShellState::default());

        toggle_clipping(&viewer, |action| state.borrow_mut().apply(action));
        assert!(!state.borrow().clipping_active);
    }

    #[test]
    fn test_place_plane_keeps_exactly_one() {
        let viewer = MockViewer::new();
        place_plane(&viewer);
        place_plane(&viewer);
        assert_eq!(viewer.clipper.planes(), 1);
        assert_eq!(
            viewer.calls(),
            vec![
                Call::DeleteAllPlanes,
                Call::CreatePlane,
                Call::DeleteAllPlanes,
                Call::CreatePlane,
            ]
        );
    }
}
