//! HTTP data source over `fetch` (gloo-net).
//!
//! Talks to a json-server style REST store:
//! - `GET  {collection}`       -> whole collection (bare array or `{ items }`)
//! - `POST {collection}`       -> create, body is the full record with its id
//! - `PATCH {collection}/{id}` -> partial update, body is the patch
//!
//! Any non-2xx status is a failure. Fetch failures become `CatalogError::Load`,
//! write failures `CatalogError::Mutation` (or `NotFound` on 404).

use std::marker::PhantomData;

use common::model::{Record, RecordId};
use common::source::{parse_collection, DataSource};
use common::CatalogError;
use gloo_net::http::{Request, Response};

pub struct HttpSource<R> {
    collection_url: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> HttpSource<R> {
    /// Source reading and writing `url` directly (e.g. `./db.json`).
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            collection_url: url.into(),
            _record: PhantomData,
        }
    }

    /// Source for `R::COLLECTION` under a REST base URL.
    pub fn for_collection(base_url: &str) -> Self {
        Self::new(format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            R::COLLECTION
        ))
    }

    /// The id is percent-encoded, so text ids with `/`, `?` or `#` stay one
    /// path segment.
    fn item_url(&self, id: &RecordId) -> String {
        let id = String::from(js_sys::encode_uri_component(&id.to_string()));
        format!("{}/{}", self.collection_url, id)
    }
}

fn write_failed(action: &str, collection: &str, detail: impl std::fmt::Display) -> CatalogError {
    CatalogError::Mutation(format!("Failed to {} {}: {}", action, collection, detail))
}

fn ensure_written(response: &Response, action: &str, collection: &str) -> Result<(), CatalogError> {
    if response.ok() {
        Ok(())
    } else {
        Err(write_failed(action, collection, response.status()))
    }
}

impl<R: Record> DataSource<R> for HttpSource<R> {
    async fn fetch_all(&self) -> Result<Vec<R>, CatalogError> {
        let response = Request::get(&self.collection_url)
            .send()
            .await
            .map_err(|e| CatalogError::Load(e.to_string()))?;
        if !response.ok() {
            return Err(CatalogError::Load(format!(
                "Failed to fetch: {}",
                response.status()
            )));
        }
        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CatalogError::Load(e.to_string()))?;
        parse_collection(payload)
    }

    async fn create(&self, record: &R) -> Result<R, CatalogError> {
        let response = Request::post(&self.collection_url)
            .json(record)
            .map_err(|e| write_failed("add", R::COLLECTION, e))?
            .send()
            .await
            .map_err(|e| write_failed("add", R::COLLECTION, e))?;
        ensure_written(&response, "add", R::COLLECTION)?;
        response
            .json()
            .await
            .map_err(|e| write_failed("add", R::COLLECTION, e))
    }

    async fn patch(&self, id: &RecordId, patch: &R::Patch) -> Result<R, CatalogError> {
        let response = Request::patch(&self.item_url(id))
            .json(patch)
            .map_err(|e| write_failed("update", R::COLLECTION, e))?
            .send()
            .await
            .map_err(|e| write_failed("update", R::COLLECTION, e))?;
        if response.status() == 404 {
            return Err(CatalogError::not_found(R::COLLECTION, id));
        }
        ensure_written(&response, "update", R::COLLECTION)?;
        response
            .json()
            .await
            .map_err(|e| write_failed("update", R::COLLECTION, e))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use common::model::Post;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn item_urls_keep_ids_in_one_segment() {
        let source: HttpSource<Post> = HttpSource::for_collection("http://api.local/");
        assert_eq!(
            source.item_url(&RecordId::from("12")),
            "http://api.local/posts/12"
        );
        assert_eq!(
            source.item_url(&RecordId::from("a/b?c#d e")),
            "http://api.local/posts/a%2Fb%3Fc%23d%20e"
        );
    }
}
