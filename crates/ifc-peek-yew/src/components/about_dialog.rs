//! About dialog with usage hints and the repository link

use crate::state::{AppContext, ShellContext};
use ifc_peek_core::ShellAction;
use yew::prelude::*;

#[function_component]
pub fn AboutDialog() -> Html {
    let app = use_context::<AppContext>().expect("AppContext not found");
    let shell = use_context::<ShellContext>().expect("ShellContext not found");

    if !shell.about_open {
        return html! {};
    }

    let close = {
        let shell = shell.clone();
        Callback::from(move |_: MouseEvent| shell.dispatch(ShellAction::SetAboutOpen(false)))
    };
    // Clicks inside the dialog must not reach the backdrop
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="backdrop dialog-backdrop" onclick={close}>
            <div class="dialog" role="dialog" onclick={stop}>
                <h2 class="dialog-title">{app.t("about")}</h2>
                <dl class="dialog-content">
                    <dt>{app.t("rightClick")}</dt>
                    <dd>{app.t("createAPlane")}</dd>
                    <dt>{app.t("doubleClick")}</dt>
                    <dd>{app.t("pickAnItem")}</dd>
                </dl>
                <a href={app.config.repository_url.clone()} target="_blank" rel="noopener">
                    {"GitHub Repo"}
                </a>
            </div>
        </div>
    }
}
