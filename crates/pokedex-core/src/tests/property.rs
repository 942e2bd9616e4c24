use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::{
    has_all_types, matches_search, ListQuery, Pokemon, PokemonType, SortKey, SortSpec, Stats,
};

const TYPE_POOL: [&str; 6] = ["Grass", "Poison", "Fire", "Water", "Flying", "Normal"];

fn arb_type_name() -> impl Strategy<Value = String> {
    prop::sample::select(TYPE_POOL.to_vec()).prop_map(str::to_string)
}

fn arb_stats() -> impl Strategy<Value = Stats> {
    // narrow range so ties are common
    prop::array::uniform6(0u32..4).prop_map(|[hp, attack, defense, sa, sd, speed]| Stats {
        hp,
        attack,
        defense,
        special_attack: sa,
        special_defense: sd,
        speed,
    })
}

/// Records numbered 1..=n in ascending order, like a loaded snapshot
fn arb_records() -> impl Strategy<Value = Vec<Pokemon>> {
    prop::collection::vec(
        (
            "[A-Za-z]{1,8}",
            arb_stats(),
            prop::collection::btree_set(arb_type_name(), 1..=2),
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, stats, types))| {
                let number = i as u32 + 1;
                Pokemon {
                    id: number,
                    number,
                    name,
                    stats,
                    types: types
                        .into_iter()
                        .map(|t| PokemonType::new(t, "AAAAAA"))
                        .collect(),
                }
            })
            .collect()
    })
}

fn arb_sort() -> impl Strategy<Value = SortSpec> {
    prop::sample::select(SortSpec::ALL_OPTIONS.map(|(spec, _)| spec).to_vec())
}

fn arb_query() -> impl Strategy<Value = ListQuery> {
    (
        "[a-zA-Z0-9]{0,2}",
        prop::collection::btree_set(arb_type_name(), 0..=2),
        arb_sort(),
    )
        .prop_map(|(search, types, sort)| ListQuery { search, types, sort })
}

/// Free text and type names outside the query-string safe set
fn arb_wild_query() -> impl Strategy<Value = ListQuery> {
    (
        "\\PC{0,12}",
        prop::collection::btree_set("\\PC{1,8}", 0..=3),
        arb_sort(),
    )
        .prop_map(|(search, types, sort)| ListQuery { search, types, sort })
}

fn numbers(records: &[Pokemon]) -> Vec<u32> {
    records.iter().map(|p| p.number).collect()
}

proptest! {
    #[test]
    fn default_query_is_identity(records in arb_records()) {
        let out = ListQuery::default().apply(&records);
        prop_assert_eq!(out, records);
    }

    #[test]
    fn result_is_exactly_the_matching_records(records in arb_records(), query in arb_query()) {
        let out = query.apply(&records);

        for p in &out {
            prop_assert!(matches_search(p, &query.search));
            prop_assert!(has_all_types(p, &query.types));
        }

        let expected: BTreeSet<u32> = records
            .iter()
            .filter(|p| matches_search(p, &query.search) && has_all_types(p, &query.types))
            .map(|p| p.number)
            .collect();
        let got: BTreeSet<u32> = out.iter().map(|p| p.number).collect();
        prop_assert_eq!(got, expected);
        prop_assert_eq!(out.len(), numbers(&out).iter().collect::<BTreeSet<_>>().len());
    }

    #[test]
    fn adding_a_type_never_grows_the_result(
        records in arb_records(),
        query in arb_query(),
        extra in arb_type_name()
    ) {
        let mut narrowed = query.clone();
        narrowed.types.insert(extra);
        prop_assert!(narrowed.apply(&records).len() <= query.apply(&records).len());
    }

    #[test]
    fn apply_is_idempotent(records in arb_records(), query in arb_query()) {
        let once = query.apply(&records);
        let twice = query.apply(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn ties_keep_number_order(records in arb_records(), sort in arb_sort()) {
        let query = ListQuery { sort, ..Default::default() };
        let out = query.apply(&records);

        for pair in out.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert_ne!(sort.compare(a, b), std::cmp::Ordering::Greater);
            if sort.compare(a, b).is_eq() {
                prop_assert!(a.number < b.number);
            }
        }
        if sort.key == SortKey::Number {
            prop_assert_eq!(out.len(), records.len());
        }
    }

    #[test]
    fn query_string_round_trips(query in arb_wild_query()) {
        let encoded = query.to_query_string();
        prop_assert_eq!(ListQuery::from_query_string(&encoded), query.clone());
        prop_assert_eq!(encoded.is_empty(), query.is_default());
    }

    #[test]
    fn query_string_is_canonical(raw in "[?a-z=&,%+0-9-]{0,24}") {
        let canonical = ListQuery::from_query_string(&raw).to_query_string();
        let reparsed = ListQuery::from_query_string(&canonical);
        prop_assert_eq!(reparsed.to_query_string(), canonical);
    }
}
