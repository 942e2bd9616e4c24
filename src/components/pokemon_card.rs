//! Pokemon Card Renderer
//!
//! Picks the holo or simple card from the global display mode.

use leptos::prelude::*;

use super::{HoloCard, SimpleCard};
use crate::context::use_display_settings;
use crate::models::Pokemon;

#[component]
pub fn PokemonCard(pokemon: Pokemon) -> impl IntoView {
    let settings = use_display_settings();

    move || {
        let pokemon = pokemon.clone();
        if settings.low_spec.get() {
            view! { <SimpleCard pokemon=pokemon /> }.into_any()
        } else {
            view! { <HoloCard pokemon=pokemon /> }.into_any()
        }
    }
}
