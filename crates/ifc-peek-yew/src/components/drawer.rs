//! Side drawer: open file, clipping toggle, about

use crate::state::{AppContext, ShellContext, ViewerContext};
use ifc_peek_core::{clipping, loader, ShellAction};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component]
pub fn Drawer() -> Html {
    let app = use_context::<AppContext>().expect("AppContext not found");
    let shell = use_context::<ShellContext>().expect("ShellContext not found");
    let viewer = use_context::<ViewerContext>().expect("ViewerContext not found");

    // Hidden file input, opened from the list entry
    let file_input_ref = use_node_ref();

    let close_drawer = {
        let shell = shell.clone();
        Callback::from(move |_: MouseEvent| shell.dispatch(ShellAction::SetDrawerOpen(false)))
    };

    let open_file_dialog = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let shell = shell.clone();
        let viewer = viewer.clone();
        let fit_to_frame = app.config.fit_to_frame;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            // Reset so that picking the same file again fires another change
            input.set_value("");

            let Some(file) = file else {
                return;
            };
            let Some(viewer) = viewer.clone() else {
                log::warn!("Viewer not ready, ignoring {}", file.name());
                return;
            };

            let shell = shell.clone();
            spawn_local(async move {
                let dispatch = move |action: ShellAction| shell.dispatch(action);
                // Outcome is reported through the shell state
                let _ = loader::load_model(&*viewer.0, file, fit_to_frame, dispatch).await;
            });
        })
    };

    let toggle_clipping = {
        let shell = shell.clone();
        let viewer = viewer.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(viewer) = viewer.as_ref() {
                let shell = shell.clone();
                clipping::toggle_clipping(&*viewer.0, move |action| shell.dispatch(action));
            }
        })
    };

    let open_about = {
        let shell = shell.clone();
        Callback::from(move |_: MouseEvent| shell.dispatch(ShellAction::SetAboutOpen(true)))
    };

    html! {
        <nav class={classes!("drawer", shell.drawer_open.then_some("open"))}>
            <div class="drawer-header">
                <button class="icon-btn" aria-label="close drawer" onclick={close_drawer}>
                    {"‹"}
                </button>
            </div>
            <hr class="divider" />
            <ul class="drawer-list">
                <input
                    ref={file_input_ref}
                    type="file"
                    accept=".ifc"
                    style="display: none"
                    onchange={on_file_change}
                />
                <li class="drawer-item" onclick={open_file_dialog}>
                    <span class="drawer-icon">{"📂"}</span>
                    <span class="drawer-text">{app.t("openFile")}</span>
                </li>
                <li
                    class={classes!("drawer-item", shell.clipping_active.then_some("selected"))}
                    onclick={toggle_clipping}
                >
                    <span class="drawer-icon">{"⇆"}</span>
                    <span class="drawer-text">{app.t("clip")}</span>
                </li>
            </ul>
            <hr class="divider" />
            <ul class="drawer-list">
                <li class="drawer-item" onclick={open_about}>
                    <span class="drawer-icon">{"?"}</span>
                    <span class="drawer-text">{app.t("about")}</span>
                </li>
            </ul>
        </nav>
    }
}
