//! Simple Card Component
//!
//! Static card used in low-spec mode.

use leptos::prelude::*;

use super::{PokemonImage, TypeBadge};
use crate::models::Pokemon;

#[component]
pub fn SimpleCard(pokemon: Pokemon) -> impl IntoView {
    let name = pokemon.name.clone();
    let number = pokemon.formatted_number();
    let types = pokemon.types.clone();

    view! {
        <div class="simple-card">
            <div class="simple-card-image">
                <PokemonImage pokemon=pokemon />
            </div>
            <div class="simple-card-info">
                <h3 class="pokemon-name">{name}</h3>
                <p class="pokemon-number">{number}</p>
                <div class="pokemon-types">
                    {types.into_iter().map(|t| view! { <TypeBadge pokemon_type=t /> }).collect_view()}
                </div>
            </div>
        </div>
    }
}
