//! Top application bar

use crate::state::{AppContext, ShellContext};
use ifc_peek_core::ShellAction;
use yew::prelude::*;

#[function_component]
pub fn AppBar() -> Html {
    let app = use_context::<AppContext>().expect("AppContext not found");
    let shell = use_context::<ShellContext>().expect("ShellContext not found");

    let open_drawer = {
        let shell = shell.clone();
        Callback::from(move |_: MouseEvent| shell.dispatch(ShellAction::SetDrawerOpen(true)))
    };

    html! {
        <header class={classes!("app-bar", shell.drawer_open.then_some("shifted"))}>
            if !shell.drawer_open {
                <button class="icon-btn" aria-label="open drawer" onclick={open_drawer}>
                    {"☰"}
                </button>
            }
            <h1 class="app-title">{app.t("title")}</h1>
        </header>
    }
}
