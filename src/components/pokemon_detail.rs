//! Pokemon Detail Component
//!
//! Detail view for one record: header, type-tinted panel with sprite and
//! stat gauges, and a back link to the listing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{AppLink, LoadingSkeletonCard, NotFound, PokemonImage, StatGauge, TypeBadge};
use crate::commands;
use crate::models::{Pokemon, StatKind};
use crate::router::use_router;

#[derive(Clone, Debug, PartialEq)]
enum DetailState {
    Loading,
    Found(Pokemon),
    Missing,
    Failed(String),
}

/// Tint and radial glow from the primary type color
pub fn panel_style(primary_color: &str) -> String {
    format!(
        "background-color: {c}20; background-image: radial-gradient(circle at 50% 50%, {c}30, transparent 60%);",
        c = primary_color
    )
}

#[component]
fn DetailBody(pokemon: Pokemon) -> impl IntoView {
    let router = use_router();
    let color = pokemon.primary_color();
    let stats = pokemon.stats;
    let name = pokemon.name.clone();
    let number = pokemon.formatted_number();
    let types = pokemon.types.clone();

    view! {
        <div class="pokemon-detail">
            <div class="detail-header">
                <h1>{name}</h1>
                <p class="pokemon-number">{number}</p>
                <div class="pokemon-types">
                    {types.into_iter().map(|t| view! { <TypeBadge pokemon_type=t /> }).collect_view()}
                </div>
            </div>

            <section class="detail-panel" style=panel_style(&color)>
                <div class="detail-image">
                    <PokemonImage pokemon=pokemon />
                </div>
                <div class="detail-stats">
                    <h2>"Stats"</h2>
                    {StatKind::ALL.into_iter().map(|kind| view! {
                        <StatGauge label=kind.label() value=stats.get(kind) color=color.clone() />
                    }).collect_view()}
                    <p class="stat-total">{format!("Total: {}", stats.total())}</p>
                </div>
            </section>

            <div class="detail-footer">
                <AppLink href=router.list_href() class="back-link">"← Back to the list"</AppLink>
            </div>
        </div>
    }
}

#[component]
pub fn PokemonDetail(number: u32) -> impl IntoView {
    let (state, set_state) = signal(DetailState::Loading);

    spawn_local(async move {
        let next = match commands::get_pokemon(number).await {
            Ok(Some(pokemon)) => DetailState::Found(pokemon),
            Ok(None) => DetailState::Missing,
            Err(e) => {
                web_sys::console::warn_1(&format!("[DETAIL] Failed to load #{}: {}", number, e).into());
                DetailState::Failed(e)
            }
        };
        let _ = set_state.try_set(next);
    });

    move || match state.get() {
        DetailState::Loading => view! {
            <div class="detail-loading"><LoadingSkeletonCard /></div>
        }.into_any(),
        DetailState::Found(pokemon) => view! { <DetailBody pokemon=pokemon /> }.into_any(),
        DetailState::Missing => view! { <NotFound /> }.into_any(),
        DetailState::Failed(message) => view! {
            <div class="error-banner" role="alert">
                {format!("Could not load Pokémon #{}: {}", number, message)}
            </div>
        }.into_any(),
    }
}
