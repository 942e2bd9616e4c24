//! Loading Skeleton Components

use leptos::prelude::*;

/// Card-sized pulsing placeholder
#[component]
pub fn LoadingSkeletonCard() -> impl IntoView {
    view! {
        <div class="skeleton-card">
            <div class="skeleton-image"></div>
            <div class="skeleton-info">
                <div class="skeleton-line skeleton-name"></div>
                <div class="skeleton-line skeleton-number"></div>
                <div class="skeleton-badges">
                    <div class="skeleton-badge"></div>
                    <div class="skeleton-badge"></div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SkeletonGrid(#[prop(default = 12)] count: usize) -> impl IntoView {
    view! {
        <div class="pokemon-grid">
            {(0..count).map(|_| view! { <LoadingSkeletonCard /> }).collect_view()}
        </div>
    }
}
