//! Type Badge Component

use leptos::prelude::*;

use crate::models::PokemonType;

/// Colored pill with the type name
#[component]
pub fn TypeBadge(pokemon_type: PokemonType) -> impl IntoView {
    let style = format!("background-color: {};", pokemon_type.css_color());
    view! {
        <span class="type-badge" style=style>{pokemon_type.name}</span>
    }
}
