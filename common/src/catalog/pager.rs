//! Pager: bounded pages over the view collection.
//!
//! Pages are 1-indexed. `total_pages` is never below 1, so an empty view still
//! has a (blank) first page. Whenever the current page falls outside
//! `[1, total_pages]` it is clamped and the clamp is reported; `Pager::paginate`
//! writes the clamped value back so a shrunken view never leaves a stale index.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page sizes offered by the page-size selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| format!("unsupported page size: {}", value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> usize {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// One page of a view collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    /// Page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// True when the requested page was out of range.
    pub clamped: bool,
}

impl<T> PageSlice<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `max(1, ceil(len / page_size))`.
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Cuts page `current_page` out of `view`. The last page may be short.
pub fn slice<T>(view: &[T], current_page: usize, page_size: PageSize) -> PageSlice<'_, T> {
    let total = total_pages(view.len(), page_size);
    let page = clamp_page(current_page, total);
    let start = ((page - 1) * page_size.get()).min(view.len());
    let end = (start + page_size.get()).min(view.len());
    PageSlice {
        items: &view[start..end],
        page,
        total_pages: total,
        total_items: view.len(),
        clamped: page != current_page,
    }
}

/// Current page and page size of a catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    current_page: usize,
    page_size: PageSize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl Pager {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            current_page: 1,
            page_size,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Changes the page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Moves forward unless already on the last page.
    pub fn next(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.current_page += 1;
        }
    }

    /// Moves back unless already on the first page.
    pub fn previous(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.current_page = clamp_page(page, total_pages);
    }

    /// Clamps against a view of `len` items. Returns true when the page moved.
    pub fn clamp_to(&mut self, len: usize) -> bool {
        let clamped = clamp_page(self.current_page, total_pages(len, self.page_size));
        let moved = clamped != self.current_page;
        self.current_page = clamped;
        moved
    }

    /// Slices `view` and persists any clamp into this pager.
    pub fn paginate<'a, T>(&mut self, view: &'a [T]) -> PageSlice<'a, T> {
        let page = slice(view, self.current_page, self.page_size);
        self.current_page = page.page;
        page
    }
}
