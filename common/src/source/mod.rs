//! Data source port: the only wire-level boundary of the catalog.
//!
//! A data source can fetch a whole collection, create a record under an id the
//! caller already assigned, and apply a partial update. The client never writes
//! optimistically; after every successful write it reloads the collection (see
//! `board`).
//!
//! Implementations:
//! - `InMemoryDataSource` here, for tests and offline use.
//! - `HttpSource` in the `frontend` crate, over `fetch`.

pub mod board;
mod in_memory;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CatalogError;
use crate::model::{Record, RecordId};

pub use board::{BoardSources, BoardWrite};
pub use in_memory::InMemoryDataSource;

/// Persistence collaborator for one record collection.
///
/// Futures are not required to be `Send`: the browser client runs everything
/// on a single thread.
#[allow(async_fn_in_trait)]
pub trait DataSource<R: Record> {
    /// Fetches the whole collection. Fails with `CatalogError::Load`.
    async fn fetch_all(&self) -> Result<Vec<R>, CatalogError>;

    /// Persists a new record. Fails with `CatalogError::Mutation`.
    async fn create(&self, record: &R) -> Result<R, CatalogError>;

    /// Applies a partial update. Fails with `CatalogError::Mutation`, or
    /// `CatalogError::NotFound` when the source no longer has `id`.
    async fn patch(&self, id: &RecordId, patch: &R::Patch) -> Result<R, CatalogError>;
}

/// Decodes a collection payload.
///
/// Both a bare array and an object wrapping the array under `items` are valid;
/// any other shape is a load error.
pub fn parse_collection<R: DeserializeOwned>(payload: Value) -> Result<Vec<R>, CatalogError> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("items") {
            Some(Value::Array(items)) => items,
            _ => return Err(CatalogError::Load("Invalid data format".into())),
        },
        _ => return Err(CatalogError::Load("Invalid data format".into())),
    };
    serde_json::from_value(Value::Array(items)).map_err(|e| CatalogError::Load(e.to_string()))
}

/// `parse_collection` over raw JSON text.
pub fn parse_collection_str<R: DeserializeOwned>(text: &str) -> Result<Vec<R>, CatalogError> {
    let payload: Value =
        serde_json::from_str(text).map_err(|e| CatalogError::Load(e.to_string()))?;
    parse_collection(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Post, Product};
    use serde_json::json;

    #[test]
    fn accepts_bare_arrays() {
        let posts: Vec<Post> =
            parse_collection(json!([{"id": "1", "title": "a"}, {"id": "2", "title": "b"}]))
                .unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn accepts_items_wrapper() {
        let products: Vec<Product> = parse_collection(json!({
            "items": [{"id": 1, "name": "Mug", "description": "Blue", "price": 4.5, "image": "mug.png"}]
        }))
        .unwrap();
        assert_eq!(products[0].name, "Mug");
    }

    #[test]
    fn rejects_other_shapes() {
        for payload in [json!({"products": []}), json!({"items": {}}), json!("x"), json!(null)] {
            assert_eq!(
                parse_collection::<Post>(payload),
                Err(CatalogError::Load("Invalid data format".into()))
            );
        }
    }

    #[test]
    fn malformed_entries_are_load_errors() {
        let result = parse_collection_str::<Post>(r#"[{"title": "no id"}]"#);
        assert!(matches!(result, Err(CatalogError::Load(_))));
        assert!(matches!(
            parse_collection_str::<Post>("{not json"),
            Err(CatalogError::Load(_))
        ));
    }
}
