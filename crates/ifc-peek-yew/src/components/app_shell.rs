//! Application shell
//!
//! Owns the shell state and the viewer instance and provides both to the
//! rest of the UI through contexts.

use crate::bridge::WebViewer;
use crate::state::{use_shell_state, AppContext, ShellContext, ViewerContext, ViewerHandle};
use ifc_peek_core::ShellAction;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::{AboutDialog, AppBar, Drawer, LoadingBackdrop, Snackbar, Viewport};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub context: AppContext,
}

/// Root component
#[function_component]
pub fn App(props: &AppProps) -> Html {
    let shell = use_shell_state();
    let viewer = use_state(|| None::<ViewerHandle>);
    let container = use_node_ref();

    // Create the viewer once, after the container is in the DOM
    {
        let viewer = viewer.clone();
        let container = container.clone();
        let config = props.context.config.clone();
        use_effect_with((), move |_| {
            match container.cast::<HtmlElement>() {
                Some(element) => match WebViewer::new(&element, &config) {
                    Ok(created) => viewer.set(Some(ViewerHandle(Rc::new(created)))),
                    Err(e) => log::error!("Failed to create viewer: {}", e),
                },
                None => log::error!("Viewer container is not mounted"),
            }
            || ()
        });
    }

    let on_close_notification = {
        let shell = shell.clone();
        Callback::from(move |id: u64| shell.dispatch(ShellAction::CloseNotification(id)))
    };

    let viewer_context: ViewerContext = (*viewer).clone();
    let drawer_open = shell.drawer_open;

    html! {
        <ContextProvider<AppContext> context={props.context.clone()}>
        <ContextProvider<ShellContext> context={shell.clone()}>
        <ContextProvider<ViewerContext> context={viewer_context}>
            <div class={classes!("app", drawer_open.then_some("drawer-open"))}>
                <AppBar />
                <Drawer />
                <main class="main">
                    <div class="toolbar-spacer" />
                    <Viewport container={container} />
                </main>
            </div>
            <LoadingBackdrop open={shell.loading} />
            <AboutDialog />
            <Snackbar
                notification={shell.notification}
                auto_hide_ms={props.context.config.snackbar_auto_hide_ms}
                on_close={on_close_notification}
            />
        </ContextProvider<ViewerContext>>
        </ContextProvider<ShellContext>>
        </ContextProvider<AppContext>>
    }
}
