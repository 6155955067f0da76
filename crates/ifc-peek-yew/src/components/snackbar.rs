//! Load result notification

use crate::state::AppContext;
use gloo::timers::callback::Timeout;
use ifc_peek_core::Notification;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SnackbarProps {
    pub notification: Option<Notification>,
    pub auto_hide_ms: u32,
    /// Called with the id of the notification to close
    pub on_close: Callback<u64>,
}

#[function_component]
pub fn Snackbar(props: &SnackbarProps) -> Html {
    let app = use_context::<AppContext>().expect("AppContext not found");

    // Restart the timer whenever a new notification appears
    {
        let on_close = props.on_close.clone();
        let auto_hide_ms = props.auto_hide_ms;
        use_effect_with(props.notification.map(|n| n.id), move |id| {
            let timeout = id.map(|id| Timeout::new(auto_hide_ms, move || on_close.emit(id)));
            move || drop(timeout)
        });
    }

    let Some(notification) = props.notification else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(notification.id))
    };

    html! {
        <div class="snackbar">
            <div class={classes!("alert", notification.kind.severity())} role="alert">
                <span class="alert-message">{app.t(notification.kind.message_key())}</span>
                <button class="icon-btn" aria-label={app.t("close").to_string()} onclick={close}>
                    {"×"}
                </button>
            </div>
        </div>
    }
}
