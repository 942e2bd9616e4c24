//! List Query Engine
//!
//! Filters and sorts the catalog snapshot for the listing view.
//! Pure: the input slice is never reordered, every call builds a new sequence.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::Pokemon;

/// Field a listing can be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Number,
    Name,
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl SortKey {
    pub const ALL: [SortKey; 8] = [
        SortKey::Number,
        SortKey::Name,
        SortKey::Hp,
        SortKey::Attack,
        SortKey::Defense,
        SortKey::SpecialAttack,
        SortKey::SpecialDefense,
        SortKey::Speed,
    ];

    /// Numeric value for every key except `Name`
    fn numeric(&self, p: &Pokemon) -> u32 {
        match self {
            SortKey::Number | SortKey::Name => p.number,
            SortKey::Hp => p.stats.hp,
            SortKey::Attack => p.stats.attack,
            SortKey::Defense => p.stats.defense,
            SortKey::SpecialAttack => p.stats.special_attack,
            SortKey::SpecialDefense => p.stats.special_defense,
            SortKey::Speed => p.stats.speed,
        }
    }

    fn compare(&self, a: &Pokemon, b: &Pokemon) -> Ordering {
        match self {
            SortKey::Name => cmp_case_insensitive(&a.name, &b.name),
            _ => self.numeric(a).cmp(&self.numeric(b)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Sort key + direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub const fn asc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub const fn desc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Comparator with the direction applied. Equal keys stay `Equal` in both
    /// directions so a stable sort keeps input order.
    pub fn compare(&self, a: &Pokemon, b: &Pokemon) -> Ordering {
        let ord = self.key.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Name contains the term (case-insensitive) or the number contains it.
/// `lowered_term` must already be lowercase.
fn matches_lowered(p: &Pokemon, term: &str, lowered_term: &str) -> bool {
    p.name.to_lowercase().contains(lowered_term) || p.number.to_string().contains(term)
}

/// Search predicate. An empty term matches everything.
pub fn matches_search(p: &Pokemon, term: &str) -> bool {
    term.is_empty() || matches_lowered(p, term, &term.to_lowercase())
}

/// AND predicate: the record carries every required type name.
pub fn has_all_types(p: &Pokemon, required: &BTreeSet<String>) -> bool {
    required.iter().all(|name| p.has_type(name))
}

/// Filter by search term and required types, then stable-sort.
pub fn filter_and_sort<'a>(
    records: &'a [Pokemon],
    search_term: &str,
    required_types: &BTreeSet<String>,
    sort: SortSpec,
) -> Vec<&'a Pokemon> {
    let lowered = search_term.to_lowercase();

    let mut result: Vec<&Pokemon> = records
        .iter()
        .filter(|p| search_term.is_empty() || matches_lowered(p, search_term, &lowered))
        .filter(|p| required_types.is_empty() || has_all_types(p, required_types))
        .collect();

    // slice::sort_by is stable
    result.sort_by(|a, b| sort.compare(a, b));
    result
}

/// Live inputs of the listing view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    /// Ordered set, so the canonical URL order falls out of iteration
    pub types: BTreeSet<String>,
    pub sort: SortSpec,
}

impl ListQuery {
    pub fn is_default(&self) -> bool {
        self.search.is_empty() && self.types.is_empty() && self.sort.is_default()
    }

    /// Owned copy of the filtered/sorted view
    pub fn apply(&self, records: &[Pokemon]) -> Vec<Pokemon> {
        filter_and_sort(records, &self.search, &self.types, self.sort)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Add the type if absent, remove it otherwise
    pub fn toggle_type(&mut self, name: &str) {
        if !self.types.remove(name) {
            self.types.insert(name.to_string());
        }
    }
}
