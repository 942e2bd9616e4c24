//! URL State Codec
//!
//! Maps a [`ListQuery`] to and from the listing's query string:
//!
//! | Parameter | Format                                   | Default      |
//! |-----------|------------------------------------------|--------------|
//! | `search`  | free text, percent-encoded               | `""`         |
//! | `types`   | comma-joined names, each encoded, sorted | empty        |
//! | `sort`    | `<field>-<asc\|desc>`                    | `numero-asc` |
//!
//! Defaults are omitted so one query state maps to exactly one string.
//! Parsing never fails: anything malformed counts as absent.

use std::borrow::Cow;
use std::collections::BTreeSet;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::query::{ListQuery, SortDirection, SortKey, SortSpec};

pub const SEARCH_PARAM: &str = "search";
pub const TYPES_PARAM: &str = "types";
pub const SORT_PARAM: &str = "sort";

/// Everything but unreserved characters gets escaped, including ',' so it
/// stays usable as the list separator.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

impl SortKey {
    /// Field token used in the `sort` parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Number => "numero",
            SortKey::Name => "nom",
            SortKey::Hp => "pv",
            SortKey::Attack => "attaque",
            SortKey::Defense => "defense",
            SortKey::SpecialAttack => "attaque_spe",
            SortKey::SpecialDefense => "defense_spe",
            SortKey::Speed => "vitesse",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        SortKey::ALL.into_iter().find(|k| k.as_param() == s)
    }
}

impl SortDirection {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

impl SortSpec {
    /// Menu entries in display order, with labels
    pub const ALL_OPTIONS: [(SortSpec, &'static str); 16] = [
        (SortSpec::asc(SortKey::Number), "Number (ascending)"),
        (SortSpec::desc(SortKey::Number), "Number (descending)"),
        (SortSpec::asc(SortKey::Name), "Name (A-Z)"),
        (SortSpec::desc(SortKey::Name), "Name (Z-A)"),
        (SortSpec::desc(SortKey::Hp), "HP (descending)"),
        (SortSpec::asc(SortKey::Hp), "HP (ascending)"),
        (SortSpec::desc(SortKey::Attack), "Attack (descending)"),
        (SortSpec::asc(SortKey::Attack), "Attack (ascending)"),
        (SortSpec::desc(SortKey::Defense), "Defense (descending)"),
        (SortSpec::asc(SortKey::Defense), "Defense (ascending)"),
        (SortSpec::desc(SortKey::SpecialAttack), "Sp. Atk (descending)"),
        (SortSpec::asc(SortKey::SpecialAttack), "Sp. Atk (ascending)"),
        (SortSpec::desc(SortKey::SpecialDefense), "Sp. Def (descending)"),
        (SortSpec::asc(SortKey::SpecialDefense), "Sp. Def (ascending)"),
        (SortSpec::desc(SortKey::Speed), "Speed (descending)"),
        (SortSpec::asc(SortKey::Speed), "Speed (ascending)"),
    ];

    /// `numero-asc` style token
    pub fn as_param(&self) -> String {
        format!("{}-{}", self.key.as_param(), self.direction.as_param())
    }

    /// Inverse of [`SortSpec::as_param`]. Field tokens contain '_' but never '-',
    /// so the direction is whatever follows the last '-'.
    pub fn parse(s: &str) -> Option<Self> {
        let (field, direction) = s.rsplit_once('-')?;
        Some(Self::new(
            SortKey::from_param(field)?,
            SortDirection::from_param(direction)?,
        ))
    }

    pub fn label(&self) -> &'static str {
        Self::ALL_OPTIONS
            .iter()
            .find(|(spec, _)| spec == self)
            .map(|(_, label)| *label)
            .unwrap_or("Sort by")
    }
}

fn encode(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, QUERY_VALUE).into()
}

/// Form-style decode: '+' is a space, invalid UTF-8 yields `None`
fn decode(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// First raw value of `name` in a query string (leading '?' optional)
fn raw_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| match pair.split_once('=') {
            Some((key, value)) if key == name => Some(value),
            None if pair == name => Some(""),
            _ => None,
        })
}

fn parse_types(raw: &str) -> BTreeSet<String> {
    let mut types = BTreeSet::new();
    for piece in raw.split(',') {
        match decode(piece) {
            Some(name) if !name.is_empty() => {
                types.insert(name);
            }
            Some(_) => {}
            // one bad element invalidates the whole parameter
            None => return BTreeSet::new(),
        }
    }
    types
}

impl ListQuery {
    /// Canonical query string: `""` when everything is default, `?...` otherwise
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::with_capacity(3);

        if !self.search.is_empty() {
            pairs.push(format!("{}={}", SEARCH_PARAM, encode(&self.search)));
        }
        if !self.types.is_empty() {
            let joined = self
                .types
                .iter()
                .map(|t| encode(t))
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(format!("{}={}", TYPES_PARAM, joined));
        }
        if !self.sort.is_default() {
            pairs.push(format!("{}={}", SORT_PARAM, self.sort.as_param()));
        }

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }

    /// Seed a query from a URL query string. Total: malformed input means defaults.
    pub fn from_query_string(query: &str) -> Self {
        let search = raw_param(query, SEARCH_PARAM)
            .and_then(decode)
            .unwrap_or_default();

        let types = raw_param(query, TYPES_PARAM)
            .map(parse_types)
            .unwrap_or_default();

        let sort = raw_param(query, SORT_PARAM)
            .and_then(decode)
            .and_then(|s| SortSpec::parse(&s))
            .unwrap_or_default();

        Self { search, types, sort }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_query_serializes_to_empty() {
        assert_eq!(ListQuery::default().to_query_string(), "");
        assert_eq!(ListQuery::from_query_string(""), ListQuery::default());
        assert_eq!(ListQuery::from_query_string("?"), ListQuery::default());
    }

    #[test]
    fn test_defaults_are_omitted() {
        let query = ListQuery {
            search: String::new(),
            types: BTreeSet::new(),
            sort: SortSpec::desc(SortKey::Speed),
        };
        assert_eq!(query.to_query_string(), "?sort=vitesse-desc");

        let query = ListQuery {
            search: "pika".to_string(),
            ..Default::default()
        };
        assert_eq!(query.to_query_string(), "?search=pika");
    }

    #[test]
    fn test_tag_order_is_canonical() {
        let mut a = ListQuery::default();
        a.toggle_type("Fire");
        a.toggle_type("Water");

        let mut b = ListQuery::default();
        b.toggle_type("Water");
        b.toggle_type("Fire");

        assert_eq!(a.to_query_string(), b.to_query_string());
        assert_eq!(a.to_query_string(), "?types=Fire,Water");
    }

    #[test]
    fn test_full_round_trip() {
        let query = ListQuery {
            search: "Mr. Mime & co/é".to_string(),
            types: set(&["Psychic", "Fairy", "Odd, Name"]),
            sort: SortSpec::desc(SortKey::SpecialDefense),
        };
        let encoded = query.to_query_string();
        assert_eq!(ListQuery::from_query_string(&encoded), query);
    }

    #[test]
    fn test_round_trip_every_sort_option() {
        for (spec, _) in SortSpec::ALL_OPTIONS {
            assert_eq!(SortSpec::parse(&spec.as_param()), Some(spec));
            let query = ListQuery {
                sort: spec,
                ..Default::default()
            };
            assert_eq!(ListQuery::from_query_string(&query.to_query_string()), query);
        }
    }

    #[test]
    fn test_search_is_encoded() {
        let query = ListQuery {
            search: "a b&c".to_string(),
            ..Default::default()
        };
        assert_eq!(query.to_query_string(), "?search=a%20b%26c");
    }

    #[test]
    fn test_parse_accepts_plus_as_space() {
        let query = ListQuery::from_query_string("?search=mr+mime");
        assert_eq!(query.search, "mr mime");
    }

    #[test]
    fn test_unknown_sort_falls_back_to_default() {
        for raw in ["?sort=taille-asc", "?sort=vitesse-up", "?sort=vitesse", "?sort="] {
            assert_eq!(ListQuery::from_query_string(raw).sort, SortSpec::default());
        }
    }

    #[test]
    fn test_attaque_spe_parses_despite_underscore() {
        assert_eq!(
            SortSpec::parse("attaque_spe-asc"),
            Some(SortSpec::asc(SortKey::SpecialAttack))
        );
    }

    #[test]
    fn test_empty_types_param_is_empty_set() {
        assert!(ListQuery::from_query_string("?types=").types.is_empty());
        assert!(ListQuery::from_query_string("?types").types.is_empty());
        assert_eq!(
            ListQuery::from_query_string("?types=Fire,,Water,").types,
            set(&["Fire", "Water"])
        );
    }

    #[test]
    fn test_types_order_in_url_does_not_matter() {
        assert_eq!(
            ListQuery::from_query_string("?types=Water,Fire"),
            ListQuery::from_query_string("?types=Fire,Water"),
        );
    }

    #[test]
    fn test_malformed_encoding_counts_as_absent() {
        let query = ListQuery::from_query_string("?search=%FF%FE&types=Fire,%C3&sort=nom-desc");
        assert_eq!(query.search, "");
        assert!(query.types.is_empty());
        assert_eq!(query.sort, SortSpec::desc(SortKey::Name));
    }

    #[test]
    fn test_first_occurrence_wins_and_unknown_params_ignored() {
        let query = ListQuery::from_query_string("utm=x&search=abra&search=kadabra");
        assert_eq!(query.search, "abra");
        assert!(query.types.is_empty());
    }

    #[test]
    fn test_sort_label() {
        assert_eq!(SortSpec::default().label(), "Number (ascending)");
        assert_eq!(SortSpec::desc(SortKey::Speed).label(), "Speed (descending)");
    }
}
