use serde::Serialize;

/// Page size shared by the index listing and the payments table.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Windowed page numbers for the pager widget; `None` marks an ellipsis.
fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    const EDGE: usize = 2;
    const AROUND: usize = 2;

    if total_pages == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + EDGE).min(total_pages + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(AROUND));
    let mid_end = (current_page + AROUND + 1).min(total_pages + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(total_pages.saturating_sub(EDGE) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=total_pages).map(Some));

    pages
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        Self {
            items,
            pages: page_window(total_pages, current_page),
            page: current_page,
        }
    }
}
