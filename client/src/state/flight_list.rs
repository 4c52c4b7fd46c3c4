//! Flight list state: paging, active search, and two-step delete.
//!
//! DESIGN
//! ======
//! Listing and search share one set of counters. The active path is
//! captured as a [`ListQuery`], so changing page simply re-issues the
//! current query with a new index. Responses are applied in completion
//! order; a late response overwrites an earlier one.

#[cfg(test)]
#[path = "flight_list_test.rs"]
mod flight_list_test;

use flights::{ApiError, Flight, FlightSearchRequest, PageResponse};

use super::toast::Notice;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub const LOAD_FAILED: &str = "Failed to load flights";
pub const SEARCH_FAILED: &str = "Search failed";
pub const PAGE_CHANGE_FAILED: &str = "Page change failed";
pub const DELETE_FAILED: &str = "Failed to delete flight. Please try again.";
pub const DELETE_SUCCEEDED: &str = "Flight deleted successfully.";

/// Which listing endpoint to call, with its paging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListQuery {
    All { page: u32, size: u32 },
    Search { criteria: FlightSearchRequest, page: u32, size: u32 },
}

/// A listing request plus the message to show if it fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRequest {
    pub query: ListQuery,
    pub failure_fallback: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightListState {
    pub flights: Vec<Flight>,
    pub current_page: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub loading: bool,
    /// Last applied criteria; empty means plain listing.
    pub criteria: FlightSearchRequest,
    /// Flight awaiting delete confirmation. `Some` means the dialog is open.
    pub pending_delete: Option<i64>,
    pub error: Notice,
    pub success: Notice,
}

impl Default for FlightListState {
    fn default() -> Self {
        Self {
            flights: Vec::new(),
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_elements: 0,
            total_pages: 0,
            loading: false,
            criteria: FlightSearchRequest::default(),
            pending_delete: None,
            error: Notice::default(),
            success: Notice::default(),
        }
    }
}

impl FlightListState {
    #[must_use]
    pub fn has_active_search(&self) -> bool {
        !self.criteria.is_empty()
    }

    fn all_query(&self) -> ListQuery {
        ListQuery::All { page: self.current_page, size: self.page_size }
    }

    fn active_query(&self) -> ListQuery {
        if self.has_active_search() {
            ListQuery::Search { criteria: self.criteria.clone(), page: self.current_page, size: self.page_size }
        } else {
            self.all_query()
        }
    }

    fn begin(&mut self, query: ListQuery, failure_fallback: &'static str) -> ListRequest {
        self.loading = true;
        ListRequest { query, failure_fallback }
    }

    /// Load the current page of the unfiltered listing.
    pub fn load(&mut self) -> ListRequest {
        let query = self.all_query();
        self.begin(query, LOAD_FAILED)
    }

    /// Apply new criteria and jump back to the first page.
    pub fn search(&mut self, criteria: FlightSearchRequest) -> ListRequest {
        self.criteria = criteria;
        self.current_page = 0;
        let query = self.active_query();
        self.begin(query, SEARCH_FAILED)
    }

    /// Drop the criteria and reload the first page of the listing.
    pub fn clear_search(&mut self) -> ListRequest {
        self.criteria = FlightSearchRequest::default();
        self.current_page = 0;
        self.load()
    }

    /// Move to `page`, re-issuing whichever path is active.
    pub fn change_page(&mut self, page: u32) -> ListRequest {
        self.current_page = page;
        if self.has_active_search() {
            let query = self.active_query();
            self.begin(query, PAGE_CHANGE_FAILED)
        } else {
            self.load()
        }
    }

    pub fn apply_page(&mut self, page: PageResponse<Flight>) {
        self.flights = page.content;
        self.total_elements = page.total_elements;
        self.total_pages = page.total_pages;
        self.loading = false;
    }

    pub fn load_failed(&mut self, request: &ListRequest, err: &ApiError) {
        self.error.show(err.user_message(request.failure_fallback));
        self.loading = false;
    }

    /// Open the delete confirmation for `id`. No request is made yet.
    pub fn open_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    /// Close the confirmation and forget the target.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete, returning the id to delete.
    pub fn confirm_delete(&mut self) -> Option<i64> {
        let id = self.pending_delete?;
        self.loading = true;
        Some(id)
    }

    /// Close the dialog and reload the current page of the plain listing.
    pub fn delete_succeeded(&mut self) -> ListRequest {
        self.pending_delete = None;
        self.success.show(DELETE_SUCCEEDED);
        self.load()
    }

    pub fn delete_failed(&mut self, err: &ApiError) {
        self.pending_delete = None;
        self.loading = false;
        self.error.show(err.user_message(DELETE_FAILED));
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages
    }

    /// Zero-based page indices for the page buttons.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<u32> {
        (0..self.total_pages).collect()
    }

    /// One-based `(first, last)` row numbers shown, or `None` when empty.
    #[must_use]
    pub fn showing_range(&self) -> Option<(u64, u64)> {
        if self.flights.is_empty() {
            return None;
        }
        let first = u64::from(self.current_page) * u64::from(self.page_size) + 1;
        let last = first + self.flights.len() as u64 - 1;
        Some((first, last))
    }
}
