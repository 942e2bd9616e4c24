//! UI Components
//!
//! Reusable Leptos components.

mod app_link;
mod holo_card;
mod list_controls;
mod loading_skeleton;
mod low_spec_toggle;
mod not_found;
mod pokemon_card;
mod pokemon_detail;
mod pokemon_image;
mod pokemon_list;
mod simple_card;
mod stat_gauge;
mod theme_toggle;
mod type_badge;

pub use app_link::AppLink;
pub use holo_card::HoloCard;
pub use list_controls::ListControls;
pub use loading_skeleton::{LoadingSkeletonCard, SkeletonGrid};
pub use low_spec_toggle::LowSpecToggle;
pub use not_found::NotFound;
pub use pokemon_card::PokemonCard;
pub use pokemon_detail::PokemonDetail;
pub use pokemon_image::PokemonImage;
pub use pokemon_list::PokemonList;
pub use simple_card::SimpleCard;
pub use stat_gauge::StatGauge;
pub use theme_toggle::ThemeToggle;
pub use type_badge::TypeBadge;
