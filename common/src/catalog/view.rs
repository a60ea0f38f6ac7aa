use super::{DeleteMode, PageSize, SortKey};
use crate::model::{Record, RecordId};

/// Everything a renderer needs to draw one catalog page.
///
/// Built by `Catalog::snapshot` after a refresh, so the page is always within
/// `[1, total_pages]` and `items` always belongs to the filtered, sorted view.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a, R> {
    pub items: Vec<&'a R>,
    pub page: usize,
    pub total_pages: usize,
    /// Size of the view collection across all pages.
    pub filtered_count: usize,
    /// Size of the whole store, ignoring the filter.
    pub store_len: usize,
    pub filter_term: &'a str,
    /// Active sort, for highlighting the selector.
    pub sort_key: SortKey,
    pub page_size: PageSize,
    /// Record currently open in the edit form, if any.
    pub editing: Option<&'a RecordId>,
    pub delete_mode: DeleteMode,
    pub revision: u64,
}

impl<R: Record> CatalogView<'_, R> {
    pub fn is_store_empty(&self) -> bool {
        self.store_len == 0
    }

    /// Nothing matches the current filter although the store has records.
    pub fn is_filtered_out(&self) -> bool {
        self.store_len > 0 && self.filtered_count == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether the renderer should offer "restore" instead of edit/delete.
    pub fn offers_restore(&self, record: &R) -> bool {
        self.delete_mode == DeleteMode::Soft && record.is_deleted()
    }
}

/// Consumer of catalog snapshots (the view layer).
pub trait Renderer<R> {
    fn render(&mut self, view: &CatalogView<'_, R>);
}
