//! Error taxonomy for catalog operations.
//!
//! Every fallible operation in the core returns `CatalogError`. The variants map
//! one-to-one onto how the client reports them:
//!
//! - `Load`: inline message replacing the content area, never retried.
//! - `Validation`: blocking message, no state change.
//! - `NotFound`: logged, operation aborted quietly.
//! - `Mutation`: blocking message; nothing to roll back because local state is
//!   only refreshed from the data source after a successful write.

use thiserror::Error;

use crate::model::RecordId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Transport failure or malformed payload while fetching a collection.
    #[error("error loading data: {0}")]
    Load(String),

    /// A required field was empty (or zero) on create or edit.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The target id is not (or no longer) present.
    #[error("{collection} #{id} not found")]
    NotFound {
        collection: &'static str,
        id: RecordId,
    },

    /// The data source rejected a write.
    #[error("{0}")]
    Mutation(String),

    /// A save was requested while no record is being edited.
    #[error("no record is being edited")]
    NoEditSession,

    /// The largest id in the collection leaves no room for another.
    #[error("no ids left in {collection}")]
    IdsExhausted { collection: &'static str },

    /// Restore was requested on a catalog that removes records outright.
    #[error("restore is only available when records are soft-deleted")]
    SoftDeleteDisabled,
}

impl CatalogError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CatalogError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(collection: &'static str, id: &RecordId) -> Self {
        CatalogError::NotFound {
            collection,
            id: id.clone(),
        }
    }

    /// True for errors the client shows in a blocking dialog.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            CatalogError::Validation { .. }
                | CatalogError::Mutation(_)
                | CatalogError::IdsExhausted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_user_facing() {
        let err = CatalogError::validation("title", "Please enter a post title");
        assert_eq!(err.to_string(), "Please enter a post title");
        assert!(err.is_blocking());
    }

    #[test]
    fn not_found_names_collection_and_id() {
        let err = CatalogError::not_found("posts", &RecordId::from("7"));
        assert_eq!(err.to_string(), "posts #7 not found");
        assert!(!err.is_blocking());
    }
}
