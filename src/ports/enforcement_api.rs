//! Remote enforcement API port definition.

use crate::domain::{AppError, PageParams, RawRecord, RemoteMetadata};

/// Port for the paginated enforcement endpoint.
pub trait EnforcementApi {
    /// Query the pagination envelope metadata: current skip, total record
    /// count, and dataset freshness.
    fn fetch_metadata(&self) -> Result<RemoteMetadata, AppError>;

    /// Fetch one page of raw records at the given cursor position.
    fn fetch_page(&self, params: PageParams) -> Result<Vec<RawRecord>, AppError>;
}
