//! Theme
//!
//! Light/dark/system preference, persisted in `localStorage["theme"]` and
//! applied as a class plus `color-scheme` on the document element.
//! `System` follows OS changes while the app is open.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub const THEME_STORAGE_KEY: &str = "theme";

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    /// Whether an OS color-scheme change must be re-applied
    pub fn follows_system(&self) -> bool {
        matches!(self, Theme::System)
    }

    /// Whether the dark palette applies
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => system_prefers_dark,
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored preference; unknown or missing values give `System`
pub fn load_theme() -> Theme {
    storage()
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|v| Theme::parse(&v))
        .unwrap_or_default()
}

pub fn save_theme(theme: Theme) {
    if let Some(storage) = storage() {
        if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
            web_sys::console::warn_1(&"[THEME] Failed to persist theme".into());
        }
    }
}

fn dark_media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

pub fn system_prefers_dark() -> bool {
    dark_media_query().map(|mql| mql.matches()).unwrap_or(false)
}

/// Re-apply `theme` on OS color-scheme changes while it is `System`.
/// The listener is removed when the calling owner is cleaned up.
pub fn watch_system_theme(theme: ReadSignal<Theme>) {
    let Some(mql) = dark_media_query() else {
        return;
    };

    let on_change = Closure::<dyn FnMut()>::new(move || {
        let current = theme.get_untracked();
        if current.follows_system() {
            apply_theme(current);
        }
    });
    if mql
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .is_err()
    {
        web_sys::console::warn_1(&"[THEME] Failed to watch system color scheme".into());
        return;
    }

    let listener = StoredValue::new_local(Some((mql, on_change)));
    on_cleanup(move || {
        if let Some(Some((mql, on_change))) = listener.try_update_value(Option::take) {
            let callback = on_change.as_ref().unchecked_ref();
            let _ = mql.remove_event_listener_with_callback("change", callback);
        }
    });
}

/// Toggle `dark`/`light` on `<html>` and set its `color-scheme`
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let dark = theme.is_dark(system_prefers_dark());
    let (add, remove) = if dark { ("dark", "light") } else { ("light", "dark") };
    let classes = root.class_list();
    let _ = classes.remove_1(remove);
    let _ = classes.add_1(add);

    if let Ok(el) = root.dyn_into::<web_sys::HtmlElement>() {
        let _ = el.style().set_property("color-scheme", add);
    }
}
