/// Most page buttons shown before collapsing to an ellipsis.
pub const MAX_VISIBLE_PAGES: usize = 8;

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size)
}

/// The 1-based `page` of `items`. Pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumber {
    Page(usize),
    Ellipsis,
}

/// Page buttons to display: everything when there are at most
/// `MAX_VISIBLE_PAGES` pages, otherwise the first eight, an ellipsis, and
/// the final page.
pub fn page_numbers(total_pages: usize) -> Vec<PageNumber> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageNumber::Page).collect();
    }
    let mut pages: Vec<PageNumber> = (1..=MAX_VISIBLE_PAGES).map(PageNumber::Page).collect();
    pages.push(PageNumber::Ellipsis);
    pages.push(PageNumber::Page(total_pages));
    pages
}

/// Client-style pagination state: current page plus page size. Changing the
/// page size always snaps back to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_slice(items, self.page, self.page_size)
    }
}
