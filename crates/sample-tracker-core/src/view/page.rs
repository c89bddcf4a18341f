//! Fixed-size pagination and page controls.

use serde::Serialize;

/// Rows per page.
pub const PAGE_SIZE: usize = 20;

/// Number of pages needed for `total` rows. Zero rows means zero pages.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Clamp a 1-based page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Rows of the (clamped) 1-based `page`.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let page = clamp_page(page, page_count(items.len()));
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// One numbered page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// State of the Prev / numbered / Next controls under the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub pages: Vec<PageButton>,
}

impl PageControls {
    /// Build controls for `current` out of `total_pages`.
    ///
    /// With zero pages both arrows are disabled and there are no buttons.
    pub fn new(current: usize, total_pages: usize) -> Self {
        Self {
            prev_enabled: current > 1,
            next_enabled: current < total_pages,
            pages: (1..=total_pages)
                .map(|number| PageButton {
                    number,
                    active: number == current,
                })
                .collect(),
        }
    }
}
