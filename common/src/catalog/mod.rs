//! Client-side list state: the record store plus everything derived from it.
//!
//! `Catalog` is the single owned state object of a catalog view. It replaces
//! module-level globals with one struct that is created when the client starts
//! and lives for the whole session.
//!
//! Every operation that changes the store or a view parameter (filter term,
//! sort key, page, page size) finishes with `refresh`, which:
//! 1. re-runs the query engine over the store,
//! 2. clamps the pager against the new view length,
//! 3. bumps `revision` so renderers know there is something new to draw.
//!
//! The cascade is synchronous, so `snapshot` always observes a filtered,
//! sorted, paged and clamped view.
//!
//! Sub-modules:
//! - `store`: the record store.
//! - `query`: filter + sort derivation.
//! - `pager`: page slicing and navigation.
//! - `mutation`: edit session and create/update/delete/restore.
//! - `intent`: typed user intents and the dispatcher.
//! - `view`: the snapshot handed to renderers.
//! - `board`: posts with their comments.

pub mod board;
pub mod intent;
pub mod mutation;
pub mod pager;
pub mod query;
pub mod store;
pub mod view;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::{Listable, Record, RecordId};

pub use board::PostBoard;
pub use intent::Intent;
pub use mutation::EditSession;
pub use pager::{PageSize, PageSlice, Pager};
pub use query::{CaseFoldCollation, Collation, SortKey};
pub use store::RecordStore;
pub use view::{CatalogView, Renderer};

/// What "delete" does to a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteMode {
    /// Remove the record from the store.
    #[default]
    Hard,
    /// Flag the record as deleted; it stays listed and can be restored.
    Soft,
}

/// User-controlled view parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter_term: String,
    pub sort_key: SortKey,
    pub pager: Pager,
}

pub struct Catalog<R> {
    store: RecordStore<R>,
    view: ViewState,
    edit: EditSession,
    delete_mode: DeleteMode,
    collation: Box<dyn Collation>,
    /// Store indices of the view collection, in display order.
    visible: Vec<usize>,
    revision: u64,
}

impl<R: Listable> Catalog<R> {
    pub fn new(delete_mode: DeleteMode) -> Self {
        Self {
            store: RecordStore::new(),
            view: ViewState::default(),
            edit: EditSession::Idle,
            delete_mode,
            collation: Box::new(CaseFoldCollation),
            visible: Vec::new(),
            revision: 0,
        }
    }

    /// Replaces the string ordering used by name sorts.
    pub fn with_collation(mut self, collation: impl Collation + 'static) -> Self {
        self.collation = Box::new(collation);
        self.refresh();
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.view.pager.set_page_size(page_size);
        self.refresh();
        self
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn delete_mode(&self) -> DeleteMode {
        self.delete_mode
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.store.get(id)
    }

    /// Looks up a record the user acted on; a miss is logged and reported.
    pub fn require(&self, id: &RecordId) -> Result<&R, CatalogError> {
        self.store.get(id).ok_or_else(|| not_found::<R>(id))
    }

    /// Replaces the collection with a fresh load from the data source.
    pub fn load(&mut self, records: Vec<R>) {
        self.store.load(records);
        info!("loaded {} {}", self.store.len(), R::COLLECTION);
        self.refresh();
    }

    pub fn set_filter(&mut self, term: impl Into<String>) {
        self.view.filter_term = term.into();
        self.refresh();
    }

    pub fn set_sort(&mut self, sort_key: SortKey) {
        self.view.sort_key = sort_key;
        self.refresh();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.view.pager.set_page_size(page_size);
        self.refresh();
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.view.pager.next(total);
        self.refresh();
    }

    pub fn previous_page(&mut self) {
        self.view.pager.previous();
        self.refresh();
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.view.pager.go_to(page, total);
        self.refresh();
    }

    pub fn total_pages(&self) -> usize {
        pager::total_pages(self.visible.len(), self.view.pager.page_size())
    }

    /// Number of records in the view collection.
    pub fn filtered_count(&self) -> usize {
        self.visible.len()
    }

    /// Re-derives the view collection and clamps the pager.
    pub fn refresh(&mut self) {
        self.visible = query::derive_indices(
            self.store.records(),
            &self.view.filter_term,
            self.view.sort_key,
            self.collation.as_ref(),
        );
        if self.view.pager.clamp_to(self.visible.len()) {
            debug!(
                "{} view shrank to {} items, page clamped to {}",
                R::COLLECTION,
                self.visible.len(),
                self.view.pager.current_page()
            );
        }
        self.revision += 1;
    }

    /// The full view collection (all pages).
    pub fn visible(&self) -> Vec<&R> {
        let records = self.store.records();
        self.visible.iter().map(|&index| &records[index]).collect()
    }

    pub fn snapshot(&self) -> CatalogView<'_, R> {
        let records = self.store.records();
        let page = pager::slice(
            &self.visible,
            self.view.pager.current_page(),
            self.view.pager.page_size(),
        );
        CatalogView {
            items: page.items.iter().map(|&index| &records[index]).collect(),
            page: page.page,
            total_pages: page.total_pages,
            filtered_count: page.total_items,
            store_len: records.len(),
            filter_term: &self.view.filter_term,
            sort_key: self.view.sort_key,
            page_size: self.view.pager.page_size(),
            editing: self.edit.target(),
            delete_mode: self.delete_mode,
            revision: self.revision,
        }
    }

    /// Hands the current snapshot to `renderer`.
    pub fn render(&self, renderer: &mut dyn Renderer<R>) {
        renderer.render(&self.snapshot());
    }
}

pub(crate) fn not_found<R: Record>(id: &RecordId) -> CatalogError {
    warn!("{} #{} not found", R::COLLECTION, id);
    CatalogError::not_found(R::COLLECTION, id)
}
