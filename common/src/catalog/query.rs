//! Query engine: derives the view collection from the record store.
//!
//! Filtering runs first (case-insensitive substring on name or description),
//! then a stable sort keyed by `SortKey`. Derivation never mutates the store.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::Listable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Store insertion order.
    #[default]
    None,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown sort key: {}", s))
    }
}

/// String ordering used for name sorts.
pub trait Collation {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Compares lower-cased text. Used when no locale collator is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseFoldCollation;

impl Collation for CaseFoldCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.to_lowercase().cmp(&b.to_lowercase())
    }
}

/// Normalized form of a search input: trimmed and lower-cased.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// True when `record` matches an already normalized term.
pub fn matches<R: Listable>(record: &R, normalized_term: &str) -> bool {
    normalized_term.is_empty()
        || record.name().to_lowercase().contains(normalized_term)
        || record.description().to_lowercase().contains(normalized_term)
}

/// Indices into `records` of the view collection, filtered then sorted.
pub fn derive_indices<R: Listable>(
    records: &[R],
    filter_term: &str,
    sort_key: SortKey,
    collation: &dyn Collation,
) -> Vec<usize> {
    let term = normalize_term(filter_term);
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(*record, &term))
        .map(|(index, _)| index)
        .collect();

    // `sort_by` is stable, so ties keep store order.
    match sort_key {
        SortKey::None => {}
        SortKey::NameAsc => {
            indices.sort_by(|&a, &b| collation.compare(records[a].name(), records[b].name()))
        }
        SortKey::NameDesc => {
            indices.sort_by(|&a, &b| collation.compare(records[b].name(), records[a].name()))
        }
        SortKey::PriceAsc => indices
            .sort_by(|&a, &b| records[a].magnitude().total_cmp(&records[b].magnitude())),
        SortKey::PriceDesc => indices
            .sort_by(|&a, &b| records[b].magnitude().total_cmp(&records[a].magnitude())),
    }
    indices
}

/// The view collection itself, borrowing from `records`.
pub fn derive<'a, R: Listable>(
    records: &'a [R],
    filter_term: &str,
    sort_key: SortKey,
    collation: &dyn Collation,
) -> Vec<&'a R> {
    derive_indices(records, filter_term, sort_key, collation)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, RecordId};

    fn product(id: u64, name: &str, description: &str, price: f64) -> Product {
        Product {
            id: RecordId::Int(id),
            name: name.into(),
            description: description.into(),
            price,
            image: String::new(),
            is_deleted: None,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "banana", "Yellow fruit", 2.0),
            product(2, "Apple", "Red fruit", 3.0),
            product(3, "cherry", "Small and red", 2.0),
            product(4, "apple", "Green variety", 1.0),
        ]
    }

    fn ids(view: &[&Product]) -> Vec<u64> {
        view.iter().filter_map(|p| p.id.numeric()).collect()
    }

    #[test]
    fn empty_term_with_no_sort_returns_store_order() {
        let records = sample();
        let view = derive(&records, "", SortKey::None, &CaseFoldCollation);
        assert_eq!(ids(&view), [1, 2, 3, 4]);
    }

    #[test]
    fn filter_matches_name_or_description_ignoring_case() {
        let records = sample();
        let view = derive(&records, "  RED ", SortKey::None, &CaseFoldCollation);
        assert_eq!(ids(&view), [2, 3]);

        for record in &records {
            let included = view.iter().any(|p| p.id == record.id);
            assert_eq!(included, matches(record, "red"));
        }
    }

    #[test]
    fn name_sort_is_case_insensitive_and_stable() {
        let records = sample();
        let view = derive(&records, "", SortKey::NameAsc, &CaseFoldCollation);
        assert_eq!(ids(&view), [2, 4, 1, 3]);

        let view = derive(&records, "", SortKey::NameDesc, &CaseFoldCollation);
        assert_eq!(ids(&view), [3, 1, 2, 4]);
    }

    #[test]
    fn price_sort_keeps_ties_in_store_order() {
        let records = sample();
        let view = derive(&records, "", SortKey::PriceAsc, &CaseFoldCollation);
        assert_eq!(ids(&view), [4, 1, 3, 2]);

        let view = derive(&records, "", SortKey::PriceDesc, &CaseFoldCollation);
        assert_eq!(ids(&view), [2, 1, 3, 4]);
    }

    #[test]
    fn every_sort_is_a_permutation_of_the_filtered_set() {
        let records = sample();
        let mut expected = ids(&derive(&records, "fruit", SortKey::None, &CaseFoldCollation));
        expected.sort_unstable();
        for key in SortKey::ALL {
            let mut got = ids(&derive(&records, "fruit", key, &CaseFoldCollation));
            got.sort_unstable();
            assert_eq!(got, expected, "sort key {}", key);
        }
    }

    #[test]
    fn nothing_matching_yields_an_empty_view() {
        let records = sample();
        assert!(derive(&records, "durian", SortKey::NameAsc, &CaseFoldCollation).is_empty());
        let empty: Vec<Product> = Vec::new();
        assert!(derive(&empty, "", SortKey::None, &CaseFoldCollation).is_empty());
    }

    #[test]
    fn sort_keys_parse_from_their_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert!("price".parse::<SortKey>().is_err());
    }
}
