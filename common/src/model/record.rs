use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Stable identifier of a record.
///
/// Data sources hand out either JSON numbers or strings, so both are accepted
/// as-is. Two ids compare equal when they denote the same number (`7` and
/// `"7"`) or are the same text.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(u64),
    Text(String),
}

impl RecordId {
    /// Integer value of the id, if it has one.
    pub fn numeric(&self) -> Option<u64> {
        match self {
            RecordId::Int(n) => Some(*n),
            RecordId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a == b,
            _ => match (self, other) {
                (RecordId::Text(a), RecordId::Text(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.numeric() {
            Some(n) => n.hash(state),
            None => {
                if let RecordId::Text(s) = self {
                    s.hash(state);
                }
            }
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}

/// An entity the record store can hold and the data source can persist.
///
/// `Draft` is the field bundle collected by a create/edit form, `Patch` the
/// partial update sent to the data source (absent fields are not written).
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned {
    type Draft: Clone + fmt::Debug;
    type Patch: Clone + fmt::Debug + Serialize;

    /// Path segment of the collection on the data source (`posts`, `comments`, ...).
    const COLLECTION: &'static str;

    fn id(&self) -> &RecordId;

    fn set_id(&mut self, id: RecordId);

    /// Converts a sequence number into this collection's id representation.
    fn make_id(seq: u64) -> RecordId {
        RecordId::Int(seq)
    }

    fn is_deleted(&self) -> bool;

    fn set_deleted(&mut self, deleted: bool);

    /// Checks that every required field of `draft` is present.
    fn validate(draft: &Self::Draft) -> Result<(), CatalogError>;

    fn from_draft(id: RecordId, draft: &Self::Draft) -> Self;

    fn patch_from_draft(draft: &Self::Draft) -> Self::Patch;

    /// Patch that writes only the deletion flag.
    fn deletion_patch(deleted: bool) -> Self::Patch;

    fn apply(&mut self, patch: &Self::Patch);
}

/// Records the query engine can filter and sort.
pub trait Listable: Record {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Numeric sort key (price, views).
    fn magnitude(&self) -> f64;
}

/// Fails with a validation error when `value` is blank.
pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    message: &str,
) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::validation(field, message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn numeric_and_text_ids_compare_by_value() {
        assert_eq!(RecordId::from(3), RecordId::from("3"));
        assert_ne!(RecordId::from("abc"), RecordId::from("abd"));
        assert_ne!(RecordId::from(3), RecordId::from("abc"));
    }

    #[test]
    fn equal_ids_hash_alike() {
        let mut set = HashSet::new();
        set.insert(RecordId::from(12));
        assert!(set.contains(&RecordId::from("12")));
    }

    #[test]
    fn ids_deserialize_from_numbers_and_strings() {
        let ids: Vec<RecordId> = serde_json::from_str(r#"[1, "2", "x9"]"#).unwrap();
        assert_eq!(ids[0], RecordId::Int(1));
        assert_eq!(ids[1].numeric(), Some(2));
        assert_eq!(ids[2].numeric(), None);
        assert_eq!(ids[2].to_string(), "x9");
    }
}
