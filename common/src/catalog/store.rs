//! Authoritative in-memory collection of records.
//!
//! The store keeps records in source order and looks them up by linear scan;
//! collections are expected to stay in the low thousands. Ids are unique at all
//! times: `load` drops later duplicates and `insert` always assigns a fresh id.

use log::warn;

use crate::error::CatalogError;
use crate::model::{Record, RecordId};

#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection, preserving source order.
    pub fn load(&mut self, records: Vec<R>) {
        let mut kept: Vec<R> = Vec::with_capacity(records.len());
        for record in records {
            if kept.iter().any(|r| r.id() == record.id()) {
                warn!(
                    "dropping duplicate {} id {} from loaded payload",
                    R::COLLECTION,
                    record.id()
                );
                continue;
            }
            kept.push(record);
        }
        self.records = kept;
    }

    /// `max(numeric ids) + 1`, in this collection's id representation.
    ///
    /// Not safe against concurrent writers on the data source; two clients can
    /// compute the same id. Fails once the largest id is `u64::MAX`.
    pub fn next_id(&self) -> Result<RecordId, CatalogError> {
        let max = self
            .records
            .iter()
            .filter_map(|r| r.id().numeric())
            .max()
            .unwrap_or(0);
        max.checked_add(1)
            .map(R::make_id)
            .ok_or(CatalogError::IdsExhausted {
                collection: R::COLLECTION,
            })
    }

    /// Appends `record` under a freshly assigned id and returns that id.
    pub fn insert(&mut self, mut record: R) -> Result<RecordId, CatalogError> {
        let id = self.next_id()?;
        record.set_id(id.clone());
        self.records.push(record);
        Ok(id)
    }

    /// Merges `patch` into the matching record. Returns false (and changes
    /// nothing) when the id is absent.
    pub fn update(&mut self, id: &RecordId, patch: &R::Patch) -> bool {
        match self.get_mut(id) {
            Some(record) => {
                record.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> Option<R> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    /// Sets the deletion flag. `Some(changed)` when the record exists, so
    /// flagging an already-flagged record reports `Some(false)`.
    pub fn set_deleted(&mut self, id: &RecordId, deleted: bool) -> Option<bool> {
        let record = self.get_mut(id)?;
        if record.is_deleted() == deleted {
            return Some(false);
        }
        record.set_deleted(deleted);
        Some(true)
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn get_mut(&mut self, id: &RecordId) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
