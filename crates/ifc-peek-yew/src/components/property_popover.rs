//! Property popover shown next to a picked entity

use gloo::events::EventListener;
use ifc_peek_core::{Anchor, EntityPropertyRecord};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PropertyPopoverProps {
    pub anchor: Anchor,
    pub record: EntityPropertyRecord,
    pub on_close: Callback<()>,
}

/// Popover listing the non-empty rows of an entity record
///
/// Closes on a click outside it, on Escape, or from its close button.
#[function_component]
pub fn PropertyPopover(props: &PropertyPopoverProps) -> Html {
    // Escape closes the popover while it is mounted
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|e| e.key() == "Escape");
                    if is_escape {
                        on_close.emit(());
                    }
                })
            });
            move || drop(listener)
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let style = format!("left: {}px; top: {}px;", props.anchor.x, props.anchor.y);

    html! {
        <div class="popover-backdrop" onclick={close.clone()}>
            <div class="popover" role="dialog" style={style} onclick={stop}>
                <button class="icon-btn popover-close" aria-label="close" onclick={close}>
                    {"×"}
                </button>
                <dl class="property-list">
                    { for props.record.rows().map(|(key, value)| html! {
                        <>
                            <dt class="property-key">{key}</dt>
                            <dd class="property-value">{value.to_string()}</dd>
                        </>
                    }) }
                </dl>
            </div>
        </div>
    }
}
