//! Search controller: owns the filter/page state and drives a [`Surface`].
//!
//! The controller is the only place state changes. Each call to
//! [`SearchController::search`] shows the loading indicator, performs the
//! request and then shows either the rendered results or a fixed error
//! message. The page state only moves when a response arrives. Errors are
//! never retried and never classified.

use crate::config::detail_path;
use crate::error::{CatalogError, Result};
use crate::filters::SearchFilters;
use crate::models::SearchResponse;
use crate::transport::Transport;
use crate::view::{render_pagination, render_results, PageControl, PaginationState, ResultsView};
use crate::CatalogClient;

pub const ERROR_MESSAGE: &str = "Error loading results. Please try again.";

/// Rendering target driven by the controller.
pub trait Surface {
    /// A search is in flight.
    fn show_loading(&mut self);

    /// A search completed.
    fn show_results(&mut self, results: &ResultsView, pagination: &[PageControl]);

    /// A search failed; `message` is the user-facing text.
    fn show_error(&mut self, message: &str);

    /// Leave the search page for `path`.
    fn navigate(&mut self, path: &str);
}

// ---------------------------------------------------------------------------
// SearchState / SearchView
// ---------------------------------------------------------------------------

/// Request state carried between searches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Filters sent with the most recent search.
    pub filters: SearchFilters,
    pub pagination: PaginationState,
}

impl SearchState {
    pub fn current_page(&self) -> u32 {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.total_pages()
    }
}

/// What the surface currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    Idle,
    Loading,
    Loaded {
        results: ResultsView,
        pagination: Vec<PageControl>,
    },
    Failed {
        message: &'static str,
    },
}

// ---------------------------------------------------------------------------
// SearchController
// ---------------------------------------------------------------------------

/// Drives searches against a [`CatalogClient`] and keeps the page state.
pub struct SearchController<T: Transport> {
    client: CatalogClient<T>,
    filters: SearchFilters,
    state: SearchState,
    view: SearchView,
    last_response: Option<SearchResponse>,
}

impl<T: Transport> SearchController<T> {
    pub fn new(client: CatalogClient<T>) -> Self {
        Self {
            client,
            filters: SearchFilters::default(),
            state: SearchState::default(),
            view: SearchView::Idle,
            last_response: None,
        }
    }

    pub fn client(&self) -> &CatalogClient<T> {
        &self.client
    }

    /// Filters that the next search will send.
    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Mutable access to the pending filters (the "form fields").
    pub fn filters_mut(&mut self) -> &mut SearchFilters {
        &mut self.filters
    }

    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    /// Response of the last successful search.
    pub fn last_response(&self) -> Option<&SearchResponse> {
        self.last_response.as_ref()
    }

    /// Run a search for `page` with the pending filters.
    ///
    /// Returns `Err` only for a page of 0, before anything is shown. Request
    /// failures are reported through the surface and the returned view.
    pub fn search<S: Surface + ?Sized>(&mut self, page: u32, surface: &mut S) -> Result<&SearchView> {
        if page == 0 {
            return Err(CatalogError::InvalidArgument(
                "page numbers start at 1".to_string(),
            ));
        }

        self.state.filters = self.filters.clone();

        self.view = SearchView::Loading;
        surface.show_loading();

        match self.client.search(&self.state.filters, page) {
            Ok(data) => {
                if data.pages > 0 && page > data.pages {
                    log::warn!(
                        "Requested page {} beyond last page {}; showing controls for page {}",
                        page,
                        data.pages,
                        data.pages
                    );
                }
                self.state.pagination = PaginationState::new(page, data.pages);

                let results = render_results(&data);
                let pagination = render_pagination(&self.state.pagination);
                log::info!(
                    "Search page {} returned {} of {} results",
                    page,
                    results.cards.len(),
                    data.total
                );
                surface.show_results(&results, &pagination);
                self.view = SearchView::Loaded {
                    results,
                    pagination,
                };
                self.last_response = Some(data);
            }
            Err(e) => {
                // Pagination keeps the page count of the last good response.
                log::error!("Search request failed: {}", e);
                surface.show_error(ERROR_MESSAGE);
                self.view = SearchView::Failed {
                    message: ERROR_MESSAGE,
                };
            }
        }

        Ok(&self.view)
    }

    /// Re-run the current search on page `page`, which must exist.
    pub fn go_to_page<S: Surface + ?Sized>(&mut self, page: u32, surface: &mut S) -> Result<&SearchView> {
        let total = self.state.total_pages();
        if page == 0 || (total > 0 && page > total) {
            return Err(CatalogError::InvalidArgument(format!(
                "page {page} is outside 1..={total}"
            )));
        }
        self.search(page, surface)
    }

    /// Advance one page; `None` when already on the last page.
    pub fn next_page<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<&SearchView> {
        if !self.state.pagination.has_next() {
            return None;
        }
        let page = self.state.current_page() + 1;
        self.search(page, surface).ok()
    }

    /// Go back one page; `None` when already on page 1.
    pub fn previous_page<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<&SearchView> {
        if !self.state.pagination.has_previous() {
            return None;
        }
        let page = self.state.current_page() - 1;
        self.search(page, surface).ok()
    }

    /// Clear every filter and search again from page 1.
    pub fn reset_filters<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<&SearchView> {
        self.filters.clear();
        self.search(1, surface)
    }

    /// Navigate the surface to the detail view of `record_no`.
    pub fn go_to_detail<S: Surface + ?Sized>(&self, record_no: i64, surface: &mut S) -> String {
        let path = detail_path(record_no);
        log::debug!("Navigating to {}", path);
        surface.navigate(&path);
        path
    }
}
