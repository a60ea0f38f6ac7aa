//! # Product Seed
//!
//! `GET /db.json` streams the seed file as-is (content type, ranges and
//! caching headers come from `actix-files`). A missing file answers 404.
//!
//! `check` parses the same file at startup with the client's own decoder, so a
//! seed the client would reject is reported in the host log before anyone
//! opens the page.

use std::path::Path;

use actix_files::NamedFile;
use actix_web::web;
use common::model::Product;
use common::source::parse_collection_str;
use common::CatalogError;

use crate::config::HostConfig;

pub async fn process(config: web::Data<HostConfig>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(&config.db_path).await?)
}

/// Number of products in the seed at `path`.
pub fn check(path: &Path) -> Result<usize, CatalogError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CatalogError::Load(format!("{}: {}", path.display(), e)))?;
    parse_collection_str::<Product>(&text).map(|products| products.len())
}
