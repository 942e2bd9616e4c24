//! Holo Card Component
//!
//! Pointer-tilt card with rainbow shine and glare overlays.
//! Tilt state and handlers come from leptos-holo.

use leptos::prelude::*;
use leptos_holo::{
    create_holo_signals, detect_pointer_capability, make_on_mouseenter, make_on_mouseleave,
    make_on_mousemove,
};

use super::{PokemonImage, TypeBadge};
use crate::models::Pokemon;

/// Glow for records without a type
const DEFAULT_GLOW: &str = "#69d1e9";

#[component]
pub fn HoloCard(pokemon: Pokemon) -> impl IntoView {
    let holo = create_holo_signals(detect_pointer_capability());
    let glow = pokemon
        .types
        .first()
        .map(|t| t.css_color())
        .unwrap_or_else(|| DEFAULT_GLOW.to_string());

    let name = pokemon.name.clone();
    let number = pokemon.formatted_number();
    let types = pokemon.types.clone();

    view! {
        <div class="holo-card-container-wrapper">
            <div class="holo-card-perspective-container">
                <div
                    class=move || if holo.is_interacting() { "holo-card-element interacting" } else { "holo-card-element" }
                    style=move || holo.style(&glow)
                    on:mouseenter=make_on_mouseenter(holo)
                    on:mousemove=make_on_mousemove(holo)
                    on:mouseleave=make_on_mouseleave(holo)
                >
                    <div class="holo-card-content">
                        <div class="holo-card-image-container">
                            <PokemonImage pokemon=pokemon />
                            <div class="holo-card-shine-overlay"></div>
                            <div class="holo-card-glare-overlay"></div>
                        </div>
                        <div class="holo-card-info">
                            <h3 class="holo-pokemon-name">{name}</h3>
                            <p class="holo-pokemon-number">{number}</p>
                            <div class="holo-pokemon-types">
                                {types.into_iter().map(|t| view! { <TypeBadge pokemon_type=t /> }).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
