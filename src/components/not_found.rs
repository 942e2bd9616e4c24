//! Not Found Component

use leptos::prelude::*;

use super::AppLink;
use crate::router::use_router;

#[component]
pub fn NotFound() -> impl IntoView {
    let router = use_router();
    view! {
        <div class="not-found">
            <h2>"Pokémon not found"</h2>
            <p>"This page does not exist in the Pokédex."</p>
            <AppLink href=router.list_href() class="back-link">"← Back to the list"</AppLink>
        </div>
    }
}
