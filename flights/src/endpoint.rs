//! Paths and query parameters of the flight resource.
//!
//! Paths are relative to the flight API root (`.../api`), so the same values
//! serve the browser (through the host's `/api` proxy) and the CLI (against
//! any configured base URL).

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use crate::search::FlightSearchRequest;

/// One call against the flight resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightEndpoint<'a> {
    List { page: u32, size: u32 },
    Search { criteria: &'a FlightSearchRequest, page: u32, size: u32 },
    Get(i64),
    Create,
    Update(i64),
    Delete(i64),
}

impl FlightEndpoint<'_> {
    /// Path below the API root, e.g. `/flights/get/7`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List { .. } => "/flights/getall".to_owned(),
            Self::Search { .. } => "/flights/search".to_owned(),
            Self::Get(id) => format!("/flights/get/{id}"),
            Self::Create => "/flights/create".to_owned(),
            Self::Update(id) => format!("/flights/update/{id}"),
            Self::Delete(id) => format!("/flights/delete/{id}"),
        }
    }

    /// Query parameters. Paging comes first, then any search filters.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::List { page, size } => paging(*page, *size),
            Self::Search { criteria, page, size } => {
                let mut pairs = paging(*page, *size);
                pairs.extend(criteria.query_pairs());
                pairs
            }
            Self::Get(_) | Self::Create | Self::Update(_) | Self::Delete(_) => Vec::new(),
        }
    }

    /// Join [`Self::path`] onto an API root, tolerating a trailing slash.
    #[must_use]
    pub fn url(&self, api_root: &str) -> String {
        format!("{}{}", api_root.trim_end_matches('/'), self.path())
    }
}

fn paging(page: u32, size: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string()), ("size", size.to_string())]
}
