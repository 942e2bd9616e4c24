//! App Link Component
//!
//! Anchor that routes through the History API on plain left clicks.

use leptos::prelude::*;

use crate::router::use_router;

#[component]
pub fn AppLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = href.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        // Modified clicks keep their browser behavior
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
