//! Space-list state for the spaces page.
//!
//! DESIGN
//! ======
//! The list and the refresh counter live in the same render-triggering state,
//! so the counter readout updates together with the list. Each issued fetch
//! gets a request number; a response for anything older than the latest
//! request is dropped, which makes overlapping fetches resolve to the most
//! recently issued one.

#[cfg(test)]
#[path = "spaces_test.rs"]
mod spaces_test;

use crate::net::api::FetchError;
use crate::net::types::Space;

/// Where the page is in its fetch lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch issued yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(FetchError),
}

/// Shared space-list state for the spaces page.
#[derive(Clone, Debug, PartialEq)]
pub struct SpacesState {
    /// Current list, replaced wholesale on every successful fetch.
    pub items: Vec<Space>,
    /// Successful fetch completions.
    pub refresh_count: u64,
    /// Fetches issued so far.
    pub requests_issued: u64,
    pub status: FetchStatus,
    latest_request: u64,
}

impl Default for SpacesState {
    /// A single empty record stands in for the list until the first success.
    fn default() -> Self {
        Self {
            items: vec![Space::Object(serde_json::Map::new())],
            refresh_count: 0,
            requests_issued: 0,
            status: FetchStatus::Idle,
            latest_request: 0,
        }
    }
}

impl SpacesState {
    /// Record a newly issued fetch and return its request number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.requests_issued += 1;
        self.latest_request = self.requests_issued;
        self.status = FetchStatus::Loading;
        self.latest_request
    }

    /// Replace the list with `spaces` and bump the refresh counter.
    ///
    /// Returns `false` (and changes nothing) if `request` has been superseded.
    pub fn apply_success(&mut self, request: u64, spaces: Vec<Space>) -> bool {
        if self.is_stale(request) {
            return false;
        }
        self.items = spaces;
        self.refresh_count += 1;
        self.status = FetchStatus::Loaded;
        true
    }

    /// Record a failed fetch. The list and the counter are left as they were.
    ///
    /// Returns `false` (and changes nothing) if `request` has been superseded.
    pub fn apply_failure(&mut self, request: u64, error: FetchError) -> bool {
        if self.is_stale(request) {
            return false;
        }
        self.status = FetchStatus::Failed(error);
        true
    }

    pub fn apply_outcome(&mut self, request: u64, outcome: Result<Vec<Space>, FetchError>) -> bool {
        match outcome {
            Ok(spaces) => self.apply_success(request, spaces),
            Err(error) => self.apply_failure(request, error),
        }
    }

    pub fn is_stale(&self, request: u64) -> bool {
        request == 0 || request < self.latest_request || request > self.requests_issued
    }

    /// Still waiting for a first answer, or for the latest fetch.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Idle | FetchStatus::Loading)
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.status {
            FetchStatus::Failed(error) => Some(error.to_string()),
            _ => None,
        }
    }
}
