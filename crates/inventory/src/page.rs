//! Client-side pagination over an in-memory item list.
//!
//! The pager owns only the page index; the item list stays with the caller
//! and may be swapped out between calls (a refetch restarts the view on
//! whatever list it is handed next).

/// Rows shown per page, fixed by the table views.
pub const PAGE_SIZE: usize = 10;

/// A bounded window over an ordered list, with clamped navigation.
///
/// Navigation is idempotent at the boundaries: `prev` on the first page and
/// `next` on the last page leave the index unchanged. An empty list computes
/// zero total pages and the index stays pinned at 0, so the display string
/// reads "Page 1 of 0" (observed behavior of the table views, kept as is).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// A pager with a non-standard window, for views that show fewer rows.
    pub fn with_page_size(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self { page: 0, page_size }
    }

    /// Zero-based index of the current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// `ceil(len / page_size)`; 0 for an empty list.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// The current page's window into `items`.
    ///
    /// Safe against lists shorter than the current offset (e.g. after the
    /// backing list shrank): out-of-range pages yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Advance one page, clamped to the last page of a `len`-item list.
    pub fn next(&mut self, len: usize) {
        self.page = (self.page + 1).min(self.total_pages(len).saturating_sub(1));
    }

    /// Go back one page, clamped to the first page.
    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Whether the previous-page control should be enabled.
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// Whether the next-page control should be enabled.
    pub fn has_next(&self, len: usize) -> bool {
        self.page + 1 < self.total_pages(len)
    }

    /// The "Page X of Y" display string for a `len`-item list.
    pub fn label(&self, len: usize) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages(len))
    }

    /// Back to the first page (used when the backing list is refetched).
    pub fn reset(&mut self) {
        self.page = 0;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
