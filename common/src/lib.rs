//! Shared catalog core used by the browser client and the static host.
//!
//! The crate owns everything that decides *what* the catalog shows: the record
//! models, the in-memory record store, the query engine (filter + sort), the
//! pager, the mutation controller and the intent dispatcher that ties them
//! together. Rendering and transport live in the `frontend` crate; this crate
//! only defines the `DataSource` port they plug into.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod source;

pub use catalog::{Catalog, CatalogView, EditSession, Intent, PostBoard, Renderer};
pub use error::CatalogError;
