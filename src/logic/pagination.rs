//! Page arithmetic over a known result-set size.

use crate::state::QUESTIONS_PER_PAGE;

/// One entry of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    /// Page number (1-based).
    pub number: u32,
    /// Whether this is the page currently shown.
    pub active: bool,
}

/// Number of pages needed for `total` questions (`ceil(total / 10)`).
#[must_use]
pub const fn page_count(total: u32) -> u32 {
    total.div_ceil(QUESTIONS_PER_PAGE)
}

/// What: Bring `page` into `[1, max(1, page_count(total))]`.
///
/// Details:
/// - An empty result set still has page 1 so the view always has a valid page.
#[must_use]
pub fn clamp_page(page: u32, total: u32) -> u32 {
    page.clamp(1, page_count(total).max(1))
}

/// What: Build the pagination bar: one indicator per page, `active` marking the current one.
///
/// Inputs:
/// - `total`: Size of the whole result set.
/// - `current`: Page currently shown.
///
/// Output:
/// - Exactly `page_count(total)` indicators in ascending order.
#[must_use]
pub fn page_indicators(total: u32, current: u32) -> Vec<PageIndicator> {
    (1..=page_count(total))
        .map(|number| PageIndicator {
            number,
            active: number == current,
        })
        .collect()
}
