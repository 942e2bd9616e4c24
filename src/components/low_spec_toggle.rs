//! Low-Spec Toggle Component
//!
//! Floating switch between holo cards and plain cards.

use leptos::prelude::*;

use crate::context::use_display_settings;

#[component]
pub fn LowSpecToggle() -> impl IntoView {
    let settings = use_display_settings();

    view! {
        <div class="low-spec-toggle">
            <label for="low-spec-mode">
                {move || if settings.low_spec.get() { "Eco mode" } else { "Holo mode" }}
            </label>
            <input
                id="low-spec-mode"
                type="checkbox"
                role="switch"
                aria-label="Switch card display mode"
                prop:checked=move || !settings.low_spec.get()
                on:change=move |_| settings.toggle_low_spec()
            />
        </div>
    }
}
