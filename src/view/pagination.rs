//! Pagination view-model: page window, ellipses and prev/next controls.

use serde::Serialize;

/// Pages shown on each side of the current page.
pub const PAGE_WINDOW: u32 = 2;

/// Current position within a paged result set.
///
/// `current_page` is at least 1 and, when `total_pages > 0`, at most
/// `total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
        }
    }
}

impl PaginationState {
    /// Build a state, clamping `current_page` into the valid range.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let upper = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, upper),
            total_pages,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// First and last page of the neighbour window.
    pub fn window(&self) -> (u32, u32) {
        let start = self.current_page.saturating_sub(PAGE_WINDOW).max(1);
        let end = self
            .current_page
            .saturating_add(PAGE_WINDOW)
            .min(self.total_pages.max(1));
        (start, end)
    }
}

/// One element of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageControl {
    Previous { target: u32, disabled: bool },
    Page { number: u32, active: bool },
    Ellipsis,
    Next { target: u32, disabled: bool },
}

impl PageControl {
    /// Page this control navigates to, if it is clickable.
    pub fn target(&self) -> Option<u32> {
        match *self {
            PageControl::Previous { target, disabled } | PageControl::Next { target, disabled } => {
                (!disabled).then_some(target)
            }
            PageControl::Page { number, .. } => Some(number),
            PageControl::Ellipsis => None,
        }
    }
}

/// Lay out the pagination bar for `state`.
///
/// Returns nothing when there is at most one page. Otherwise: Previous, an
/// optional jump to page 1 (followed by an ellipsis if pages are skipped),
/// the window of pages around the current one, an optional ellipsis and jump
/// to the last page, then Next.
pub fn render_pagination(state: &PaginationState) -> Vec<PageControl> {
    let total = state.total_pages();
    if total <= 1 {
        return Vec::new();
    }

    let current = state.current_page();
    let (start, end) = state.window();
    let mut controls = Vec::with_capacity((end - start + 1) as usize + 6);

    controls.push(PageControl::Previous {
        target: current.saturating_sub(1).max(1),
        disabled: !state.has_previous(),
    });

    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    for number in start..=end {
        controls.push(PageControl::Page {
            number,
            active: number == current,
        });
    }

    if end < total {
        if end < total - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: total,
            active: false,
        });
    }

    controls.push(PageControl::Next {
        target: current.saturating_add(1).min(total),
        disabled: !state.has_next(),
    });

    controls
}
