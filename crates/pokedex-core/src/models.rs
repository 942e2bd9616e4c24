//! Catalog Models
//!
//! Validated records shared by the backend (producer) and the frontend (consumer).

use serde::{Deserialize, Serialize};

/// Highest display number in the catalog
pub const CATALOG_SIZE: u32 = 151;

/// Conventional upper bound of a single stat, used for gauges
pub const STAT_MAX: u32 = 255;

/// Color used when a record carries no type
pub const FALLBACK_COLOR: &str = "A0AEC0";

/// Type reference carried by a record (name + display color)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonType {
    pub name: String,
    /// 6 hex digits, no leading '#'
    pub color: String,
}

impl PokemonType {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Color as a CSS value (`#RRGGBB`)
    pub fn css_color(&self) -> String {
        format!("#{}", self.color)
    }
}

/// Tag Catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub id: u32,
    pub name: String,
    pub color: String,
}

impl TypeInfo {
    pub fn css_color(&self) -> String {
        format!("#{}", self.color)
    }
}

/// The six base stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Stats {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    pub fn total(&self) -> u32 {
        StatKind::ALL.iter().map(|k| self.get(*k)).sum()
    }
}

/// Stat selector, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    pub const ALL: [StatKind; 6] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::SpecialAttack,
        StatKind::SpecialDefense,
        StatKind::Speed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Hp => "HP",
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::SpecialAttack => "Sp. Atk",
            StatKind::SpecialDefense => "Sp. Def",
            StatKind::Speed => "Speed",
        }
    }
}

/// One catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Storage key, never shown to users
    pub id: u32,
    /// Display number (1..=151), the natural key
    pub number: u32,
    pub name: String,
    pub stats: Stats,
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    /// `#004` style label
    pub fn formatted_number(&self) -> String {
        format!("#{:03}", self.number)
    }

    pub fn image_path(&self) -> String {
        format!("/images/pokemon/{}.png", self.number)
    }

    /// Color of the first type, as a CSS value
    pub fn primary_color(&self) -> String {
        let color = self
            .types
            .first()
            .map(|t| t.color.as_str())
            .unwrap_or(FALLBACK_COLOR);
        format!("#{}", color)
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.iter().any(|t| t.name == name)
    }
}

/// Placeholder shown when a sprite fails to load
pub const PLACEHOLDER_IMAGE: &str = "/images/pokeball_placeholder.gif";

/// Immutable snapshot: all records (ordered by number) plus the Tag Catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub pokemon: Vec<Pokemon>,
    pub types: Vec<TypeInfo>,
}

impl Catalog {
    pub fn find_by_number(&self, number: u32) -> Option<&Pokemon> {
        self.pokemon.iter().find(|p| p.number == number)
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}
