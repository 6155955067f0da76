//! 3D viewport
//!
//! Hosts the viewer canvas and turns pointer input into viewer commands:
//! hover highlights, double-click inspects, right-click places a clipping
//! plane.

use crate::state::{use_inspector_state, AppContext, ViewerContext};
use ifc_peek_core::{clipping, inspector, Anchor, InspectOptions, InspectorAction, PickCounter};
use ifc_peek_model::IfcViewer;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::PropertyPopover;

#[derive(Properties, PartialEq)]
pub struct ViewportProps {
    /// Element the viewer renders into
    pub container: NodeRef,
}

#[function_component]
pub fn Viewport(props: &ViewportProps) -> Html {
    let app = use_context::<AppContext>().expect("AppContext not found");
    let viewer = use_context::<ViewerContext>().expect("ViewerContext not found");
    let inspection = use_inspector_state();
    let picks = use_memo((), |_| PickCounter::default());

    let options = InspectOptions {
        prefer_nearest: app.config.prefer_nearest_pick,
        include_children: app.config.include_property_children,
    };

    let on_double_click = {
        let viewer = viewer.clone();
        let inspection = inspection.clone();
        let picks = picks.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(viewer) = viewer.clone() else {
                return;
            };
            let ticket = picks.issue(Anchor {
                x: e.client_x(),
                y: e.client_y(),
            });
            let inspection = inspection.clone();
            spawn_local(async move {
                inspector::inspect(&*viewer.0, ticket, options, move |action| {
                    inspection.dispatch(action)
                })
                .await;
            });
        })
    };

    let on_context_menu = {
        let viewer = viewer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(viewer) = viewer.as_ref() {
                clipping::place_plane(&*viewer.0);
            }
        })
    };

    let on_mouse_move = {
        let viewer = viewer.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(viewer) = viewer.as_ref() {
                viewer.pre_pick();
            }
        })
    };

    let on_close = {
        let inspection = inspection.clone();
        Callback::from(move |_: ()| inspection.dispatch(InspectorAction::Close))
    };

    let popover = inspection.popover().map(|(anchor, record)| {
        html! {
            <PropertyPopover anchor={anchor} record={record.clone()} on_close={on_close.clone()} />
        }
    });

    html! {
        <>
            <div
                ref={props.container.clone()}
                class="ifc-container"
                ondblclick={on_double_click}
                oncontextmenu={on_context_menu}
                onmousemove={on_mouse_move}
            />
            {popover}
        </>
    }
}
