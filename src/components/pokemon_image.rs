//! Pokemon Image Component
//!
//! Sprite with a placeholder swapped in when loading fails.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{Pokemon, PLACEHOLDER_IMAGE};

#[component]
pub fn PokemonImage(pokemon: Pokemon, #[prop(optional, into)] class: String) -> impl IntoView {
    let on_error = move |ev: web_sys::ErrorEvent| {
        let Some(img) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
        else {
            return;
        };
        if needs_placeholder(&img.src()) {
            img.set_src(PLACEHOLDER_IMAGE);
        }
    };

    let loading = loading_mode(pokemon.number);

    view! {
        <img
            class=class
            src=pokemon.image_path()
            alt=pokemon.name
            loading=loading
            on:error=on_error
        />
    }
}

/// A failed placeholder must not be swapped again, or `error` loops.
fn needs_placeholder(current_src: &str) -> bool {
    !current_src.ends_with(PLACEHOLDER_IMAGE)
}

// First row is eager, the rest loads lazily
fn loading_mode(number: u32) -> &'static str {
    if number <= 12 {
        "eager"
    } else {
        "lazy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_swapped_once() {
        assert!(needs_placeholder("http://localhost:1420/images/pokemon/025.png"));
        assert!(!needs_placeholder(&format!("http://localhost:1420{PLACEHOLDER_IMAGE}")));
    }

    #[test]
    fn test_loading_mode() {
        assert_eq!(loading_mode(1), "eager");
        assert_eq!(loading_mode(12), "eager");
        assert_eq!(loading_mode(13), "lazy");
    }
}
