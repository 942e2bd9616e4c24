//! Router
//!
//! Path routing and URL writes over the History API:
//! - `navigate` pushes a new entry and updates the location signal
//! - `replace_search` rewrites the query string in place without notifying
//! - `popstate` (back/forward) re-reads the location into the signal

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::models::{ListQuery, Pokemon};
use pokedex_core::CATALOG_SIZE;

const DETAIL_PREFIX: &str = "/pokemon/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(u32),
    NotFound,
}

impl Route {
    /// Trailing slashes are ignored; detail numbers must be within the catalog
    pub fn parse(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Route::List;
        }
        match path.strip_prefix(DETAIL_PREFIX).map(str::parse::<u32>) {
            Some(Ok(number)) if (1..=CATALOG_SIZE).contains(&number) => Route::Detail(number),
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(number) => format!("{}{}", DETAIL_PREFIX, number),
            Route::NotFound => "/404".to_string(),
        }
    }
}

pub fn detail_href(pokemon: &Pokemon) -> String {
    Route::Detail(pokemon.number).href()
}

/// Path and query string (with its leading `?`, or empty)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub search: String,
}

impl Location {
    pub fn current() -> Self {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return Self::default();
        };
        Self {
            path: location.pathname().unwrap_or_else(|_| "/".to_string()),
            search: location.search().unwrap_or_default(),
        }
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.path)
    }
}

/// A canonical query is written unless the URL already carries exactly it.
/// Equivalent but non-canonical URLs are rewritten.
pub fn should_write(current_search: &str, next: &str) -> bool {
    current_search != next
}

/// Query to adopt after the URL changed, or `None` when it already matches
pub fn restored_query(current: &ListQuery, location_search: &str) -> Option<ListQuery> {
    let parsed = ListQuery::from_query_string(location_search);
    (parsed != *current).then_some(parsed)
}

fn history() -> Option<web_sys::History> {
    web_sys::window()?.history().ok()
}

/// Router handle provided via context
#[derive(Clone, Copy)]
pub struct Router {
    pub location: ReadSignal<Location>,
    set_location: WriteSignal<Location>,
    /// Query string of the listing as last written, for back links
    last_list_search: StoredValue<String>,
}

impl Router {
    pub fn new() -> Self {
        let current = Location::current();
        let last = if current.route() == Route::List {
            current.search.clone()
        } else {
            String::new()
        };
        let (location, set_location) = signal(current);
        Self {
            location,
            set_location,
            last_list_search: StoredValue::new(last),
        }
    }

    /// Re-read the location on back/forward
    pub fn listen_popstate(&self) {
        let set_location = self.set_location;
        let handle = window_event_listener(leptos::ev::popstate, move |_| {
            web_sys::console::log_1(&"[ROUTER] popstate".into());
            set_location.set(Location::current());
        });
        on_cleanup(move || handle.remove());
    }

    /// Push a history entry and route to it
    pub fn navigate(&self, url: &str) {
        let Some(history) = history() else { return };
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
            web_sys::console::warn_1(&format!("[ROUTER] pushState failed: {:?}", e).into());
            return;
        }
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        self.set_location.set(Location::current());
    }

    /// Write the listing query into the current entry. Skipped when the URL
    /// already carries it; the location signal is left untouched.
    pub fn replace_search(&self, search: &str) {
        self.last_list_search.set_value(search.to_string());

        let current = Location::current();
        if !should_write(&current.search, search) {
            return;
        }
        let url = format!("{}{}", current.path, search);
        if let Some(history) = history() {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                web_sys::console::warn_1(&format!("[ROUTER] replaceState failed: {:?}", e).into());
            }
        }
    }

    /// Listing URL with the last listing query restored
    pub fn list_href(&self) -> String {
        format!("{}{}", Route::List.href(), self.last_list_search.get_value())
    }
}

pub fn use_router() -> Router {
    use_context::<Router>().expect("Router should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_route() {
        assert_eq!(Route::parse("/"), Route::List);
        assert_eq!(Route::parse(""), Route::List);
    }

    #[test]
    fn test_detail_route() {
        assert_eq!(Route::parse("/pokemon/25"), Route::Detail(25));
        assert_eq!(Route::parse("/pokemon/151/"), Route::Detail(151));
        assert_eq!(Route::parse("/pokemon/001"), Route::Detail(1));
    }

    #[test]
    fn test_detail_out_of_range_is_not_found() {
        assert_eq!(Route::parse("/pokemon/0"), Route::NotFound);
        assert_eq!(Route::parse("/pokemon/152"), Route::NotFound);
        assert_eq!(Route::parse("/pokemon/-1"), Route::NotFound);
        assert_eq!(Route::parse("/pokemon/pikachu"), Route::NotFound);
        assert_eq!(Route::parse("/pokemon/"), Route::NotFound);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Route::parse("/types"), Route::NotFound);
        assert_eq!(Route::parse("/pokemon/25/stats"), Route::NotFound);
    }

    #[test]
    fn test_canonical_url_is_not_rewritten() {
        let query = ListQuery::from_query_string("?search=char&sort=nom-desc");
        let canonical = query.to_query_string();
        assert!(!should_write(&canonical, &canonical));
        assert!(!should_write("", &ListQuery::default().to_query_string()));
    }

    #[test]
    fn test_non_canonical_url_is_rewritten() {
        let urls = [
            "?sort=numero-asc",
            "?types=Poison,Grass",
            "?types=Grass&types=Fire",
            "?sort=bogus",
        ];
        for url in urls {
            let canonical = ListQuery::from_query_string(url).to_query_string();
            assert!(should_write(url, &canonical), "{url} should be rewritten");
        }
        assert_eq!(
            ListQuery::from_query_string("?types=Poison,Grass").to_query_string(),
            "?types=Grass,Poison"
        );
    }

    #[test]
    fn test_restored_query_only_on_change() {
        let current = ListQuery::from_query_string("?types=Grass,Poison");
        assert_eq!(restored_query(&current, "?types=Poison,Grass"), None);
        assert_eq!(restored_query(&current, "?types=Grass,Poison&sort=numero-asc"), None);

        let restored = restored_query(&current, "?search=bulb").expect("URL changed");
        assert_eq!(restored.search, "bulb");
        assert!(restored.types.is_empty());

        assert_eq!(restored_query(&current, ""), Some(ListQuery::default()));
    }

    #[test]
    fn test_href_round_trip() {
        for route in [Route::List, Route::Detail(7)] {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }
}
