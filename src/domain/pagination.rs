//! Remote pagination cursor state.

use chrono::NaiveDate;

/// Query parameters for one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub skip: u64,
    pub limit: u64,
}

/// Metadata reported by the remote source at the moment of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteMetadata {
    /// Cursor position as reported by the remote (normally zero).
    pub skip: u64,
    /// Total record count at query time.
    pub total: u64,
    /// Remote dataset freshness date.
    pub last_updated: NaiveDate,
}

/// Cursor state for exhaustive, non-duplicating paginated retrieval.
///
/// `skip` moves only forward, and only by the number of records actually
/// consumed from the most recent page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    skip: u64,
    limit: u64,
    total: u64,
    last_updated: NaiveDate,
}

impl PaginationState {
    /// Seed cursor state from the remote metadata query.
    pub fn from_metadata(meta: RemoteMetadata, limit: u64) -> Self {
        Self { skip: meta.skip, limit, total: meta.total, last_updated: meta.last_updated }
    }

    /// Parameters for the next page request. Does not advance the cursor;
    /// call `advance` after the page has been consumed, so that a failed
    /// fetch never moves the resume point.
    pub fn next_page_params(&self) -> PageParams {
        PageParams { skip: self.skip, limit: self.limit }
    }

    /// Commit `count` consumed records, moving the cursor forward.
    pub fn advance(&mut self, count: u64) {
        self.skip += count;
    }

    /// True once the cursor has reached `record_limit`.
    pub fn is_complete(&self, record_limit: u64) -> bool {
        self.skip >= record_limit
    }

    /// Effective acquisition target: the caller's cap, or everything the
    /// remote reported at initialization time. Records added upstream after
    /// initialization are not retroactively included.
    pub fn record_limit(&self, requested: Option<u64>) -> u64 {
        requested.unwrap_or(self.total)
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn last_updated(&self) -> NaiveDate {
        self.last_updated
    }
}
