//! Display Settings
//!
//! Theme and card display mode, provided once at the app root via the
//! Leptos Context API.

use leptos::prelude::*;

use crate::theme::{self, Theme};

/// App-wide display signals provided via context
#[derive(Clone, Copy)]
pub struct DisplaySettings {
    /// Theme preference - read
    pub theme: ReadSignal<Theme>,
    /// Theme preference - write
    set_theme: WriteSignal<Theme>,
    /// Plain cards instead of holo cards - read
    pub low_spec: ReadSignal<bool>,
    /// Plain cards instead of holo cards - write
    set_low_spec: WriteSignal<bool>,
}

impl DisplaySettings {
    /// Theme from storage; low-spec mode always starts off
    pub fn new(initial_theme: Theme) -> Self {
        let (theme, set_theme) = signal(initial_theme);
        let (low_spec, set_low_spec) = signal(false);
        Self {
            theme,
            set_theme,
            low_spec,
            set_low_spec,
        }
    }

    /// Change and persist the theme preference
    pub fn set_theme(&self, value: Theme) {
        theme::save_theme(value);
        self.set_theme.set(value);
    }

    pub fn toggle_low_spec(&self) {
        self.set_low_spec.update(|v| *v = !*v);
    }
}

pub fn use_display_settings() -> DisplaySettings {
    use_context::<DisplaySettings>().expect("DisplaySettings should be provided")
}
