//! Blocking overlay shown while a model loads

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingBackdropProps {
    pub open: bool,
}

#[function_component]
pub fn LoadingBackdrop(props: &LoadingBackdropProps) -> Html {
    if !props.open {
        return html! {};
    }
    html! {
        <div class="backdrop loading-backdrop" role="progressbar" aria-busy="true">
            <div class="spinner" />
        </div>
    }
}
