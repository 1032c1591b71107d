//! Explicit pagination source for list views.
//!
//! A list is paged either by the server (the view holds one page and asks
//! for another) or locally over an already filtered superset. The two
//! are never mixed: every pagination control goes through
//! [`PageSource::navigate`], which dispatches on the variant.

use super::envelope::ListPage;

#[derive(Debug, Clone, PartialEq)]
pub enum PageSource<T> {
    ServerPage {
        items: Vec<T>,
        page: usize,
        total_pages: usize,
        total: usize,
    },
    ClientFilteredPage {
        all_items: Vec<T>,
        page: usize,
        page_size: usize,
    },
}

/// What the caller has to do after a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Request this page from the server.
    Fetch(usize),
    /// Page already changed in place; re-render.
    Rerender,
    /// Requested page is the current one or out of range.
    Ignore,
}

impl<T> Default for PageSource<T> {
    fn default() -> Self {
        PageSource::ServerPage {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            total: 0,
        }
    }
}

impl<T> From<ListPage<T>> for PageSource<T> {
    fn from(p: ListPage<T>) -> Self {
        PageSource::ServerPage {
            items: p.items,
            page: p.page,
            total_pages: p.total_pages,
            total: p.total,
        }
    }
}

impl<T> PageSource<T> {
    pub fn client(all_items: Vec<T>, page: usize, page_size: usize) -> Self {
        let mut source = PageSource::ClientFilteredPage {
            all_items,
            page: 1,
            page_size: page_size.max(1),
        };
        let clamped = page.clamp(1, source.total_pages());
        if let PageSource::ClientFilteredPage { page, .. } = &mut source {
            *page = clamped;
        }
        source
    }

    pub fn is_client(&self) -> bool {
        matches!(self, PageSource::ClientFilteredPage { .. })
    }

    pub fn page(&self) -> usize {
        match self {
            PageSource::ServerPage { page, .. } | PageSource::ClientFilteredPage { page, .. } => {
                *page
            }
        }
    }

    pub fn total_pages(&self) -> usize {
        match self {
            PageSource::ServerPage { total_pages, .. } => (*total_pages).max(1),
            PageSource::ClientFilteredPage {
                all_items,
                page_size,
                ..
            } => all_items.len().div_ceil(*page_size).max(1),
        }
    }

    pub fn total(&self) -> usize {
        match self {
            PageSource::ServerPage { total, .. } => *total,
            PageSource::ClientFilteredPage { all_items, .. } => all_items.len(),
        }
    }

    /// Rows to render for the current page.
    pub fn visible(&self) -> &[T] {
        match self {
            PageSource::ServerPage { items, .. } => items,
            PageSource::ClientFilteredPage {
                all_items,
                page,
                page_size,
            } => {
                let start = (page - 1).saturating_mul(*page_size).min(all_items.len());
                let end = (start + page_size).min(all_items.len());
                &all_items[start..end]
            }
        }
    }

    /// Single entry point for every pagination control.
    pub fn navigate(&mut self, requested: usize) -> PageAction {
        let last = self.total_pages();
        if requested == 0 || requested > last || requested == self.page() {
            return PageAction::Ignore;
        }
        match self {
            PageSource::ServerPage { .. } => PageAction::Fetch(requested),
            PageSource::ClientFilteredPage { page, .. } => {
                *page = requested;
                PageAction::Rerender
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_source_slices_ten_per_page() {
        let items: Vec<u32> = (1..=25).collect();
        let mut src = PageSource::client(items, 1, 10);
        assert_eq!(src.total_pages(), 3);
        assert_eq!(src.visible(), &(1..=10).collect::<Vec<_>>()[..]);

        assert_eq!(src.navigate(3), PageAction::Rerender);
        assert_eq!(src.visible(), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn server_source_asks_for_fetch_and_keeps_its_rows() {
        let mut src: PageSource<u32> = ListPage {
            items: vec![7, 8],
            page: 1,
            total_pages: 4,
            total: 8,
        }
        .into();
        assert_eq!(src.navigate(2), PageAction::Fetch(2));
        assert_eq!(src.page(), 1);
        assert_eq!(src.visible(), &[7, 8]);
    }

    #[test]
    fn out_of_range_and_same_page_are_ignored() {
        let mut src = PageSource::client(vec![1, 2, 3], 1, 10);
        assert_eq!(src.navigate(0), PageAction::Ignore);
        assert_eq!(src.navigate(1), PageAction::Ignore);
        assert_eq!(src.navigate(2), PageAction::Ignore);
    }

    #[test]
    fn client_page_is_clamped_when_superset_shrinks() {
        let src = PageSource::client(vec![1, 2, 3], 4, 2);
        assert_eq!(src.page(), 2);
        assert_eq!(src.visible(), &[3]);
    }

    #[test]
    fn empty_client_source_has_one_empty_page() {
        let src: PageSource<u8> = PageSource::client(Vec::new(), 1, 10);
        assert_eq!(src.total_pages(), 1);
        assert!(src.visible().is_empty());
    }
}
