//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_display_settings;
use crate::theme::Theme;

/// Light / Dark / System selector
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let settings = use_display_settings();

    view! {
        <div class="theme-toggle" role="group" aria-label="Theme">
            {Theme::ALL.into_iter().map(|theme| {
                let is_active = move || settings.theme.get() == theme;
                view! {
                    <button
                        class=move || if is_active() { "theme-btn active" } else { "theme-btn" }
                        aria-pressed=move || is_active().to_string()
                        on:click=move |_| settings.set_theme(theme)
                    >
                        {theme.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
