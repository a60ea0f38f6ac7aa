//! InMemoryDataSource - Vec-backed data source for tests and offline demos.

use std::cell::{Cell, RefCell};

use super::DataSource;
use crate::error::CatalogError;
use crate::model::{Record, RecordId};

/// Single-threaded in-memory data source.
///
/// Behaves like a small REST store: `create` rejects an id that already
/// exists, `patch` reports a missing id as not found. Failures can be switched
/// on to exercise error paths.
#[derive(Debug)]
pub struct InMemoryDataSource<R> {
    records: RefCell<Vec<R>>,
    fail_fetch: Cell<bool>,
    fail_writes: Cell<bool>,
    fetches: Cell<usize>,
}

impl<R> Default for InMemoryDataSource<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R> InMemoryDataSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: RefCell::new(records),
            fail_fetch: Cell::new(false),
            fail_writes: Cell::new(false),
            fetches: Cell::new(0),
        }
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of `fetch_all` calls served so far.
    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }
}

impl<R: Clone> InMemoryDataSource<R> {
    pub fn snapshot(&self) -> Vec<R> {
        self.records.borrow().clone()
    }
}

impl<R: Record> DataSource<R> for InMemoryDataSource<R> {
    async fn fetch_all(&self) -> Result<Vec<R>, CatalogError> {
        if self.fail_fetch.get() {
            return Err(CatalogError::Load("Failed to fetch data".into()));
        }
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.records.borrow().clone())
    }

    async fn create(&self, record: &R) -> Result<R, CatalogError> {
        if self.fail_writes.get() {
            return Err(CatalogError::Mutation(format!(
                "Failed to add {}",
                R::COLLECTION
            )));
        }
        let mut records = self.records.borrow_mut();
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(CatalogError::Mutation(format!(
                "{} #{} already exists",
                R::COLLECTION,
                record.id()
            )));
        }
        records.push(record.clone());
        Ok(record.clone())
    }

    async fn patch(&self, id: &RecordId, patch: &R::Patch) -> Result<R, CatalogError> {
        if self.fail_writes.get() {
            return Err(CatalogError::Mutation(format!(
                "Failed to update {}",
                R::COLLECTION
            )));
        }
        let mut records = self.records.borrow_mut();
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| CatalogError::not_found(R::COLLECTION, id))?;
        record.apply(patch);
        Ok(record.clone())
    }
}
