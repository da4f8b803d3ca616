//! API-based source builder for FDA recall notices.

use chrono::NaiveDate;

use crate::domain::{AppError, CanonicalRecord, PaginationState, normalize};
use crate::ports::{EnforcementApi, NoopProgress, ProgressListener};
use crate::services::{
    AcquireOptions, BuilderFactory, BuilderParams, DatasetBuilder, HttpEnforcementApi,
};

/// Builds the recall dataset by exhaustively paging the enforcement
/// endpoint.
///
/// Pagination state survives a failed page fetch, so a repeated `acquire`
/// call resumes from the last committed cursor instead of refetching.
pub struct RecallBuilder<A: EnforcementApi> {
    source_id: String,
    api: A,
    page_limit: u64,
    state: Option<PaginationState>,
    records: Vec<CanonicalRecord>,
    progress: Box<dyn ProgressListener>,
}

impl<A: EnforcementApi> RecallBuilder<A> {
    pub fn new(source_id: impl Into<String>, api: A, page_limit: u64) -> Self {
        Self {
            source_id: source_id.into(),
            api,
            page_limit,
            state: None,
            records: Vec::new(),
            progress: Box::new(NoopProgress),
        }
    }

    /// Replace the progress listener.
    pub fn with_progress(mut self, progress: Box<dyn ProgressListener>) -> Self {
        self.progress = progress;
        self
    }

    /// Pagination cursor state, once the metadata query has run.
    pub fn pagination(&self) -> Result<&PaginationState, AppError> {
        self.state.as_ref().ok_or(AppError::NotInitialized)
    }

    /// Issue the metadata query once; later calls reuse the stored state.
    fn ensure_initialized(&mut self) -> Result<(), AppError> {
        if self.state.is_none() {
            let meta = self.api.fetch_metadata().map_err(|e| e.for_source(&self.source_id))?;
            self.state = Some(PaginationState::from_metadata(meta, self.page_limit));
        }
        Ok(())
    }
}

impl<A: EnforcementApi> DatasetBuilder for RecallBuilder<A> {
    fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Repeatedly fetch pages at the current cursor, normalizing and
    /// appending each page atomically, until the record limit is reached.
    /// The cursor advances by the count actually returned, so a short final
    /// page completes without an extra empty fetch.
    fn acquire(&mut self, options: &AcquireOptions) -> Result<usize, AppError> {
        self.ensure_initialized()?;
        let Some(state) = self.state.as_mut() else {
            return Err(AppError::NotInitialized);
        };

        let record_limit = state.record_limit(options.record_limit);
        self.progress.begin(record_limit);

        while !state.is_complete(record_limit) {
            let params = state.next_page_params();
            let page =
                self.api.fetch_page(params).map_err(|e| e.for_source(&self.source_id))?;
            if page.is_empty() {
                // The remote holds fewer records than it reported at
                // initialization time; treat the dataset as exhausted.
                break;
            }

            let mut batch = Vec::with_capacity(page.len());
            for raw in &page {
                batch.push(CanonicalRecord::Recall(normalize::recall_from_raw(raw)?));
            }
            self.records.extend(batch);
            state.advance(page.len() as u64);
            self.progress.advance(state.skip(), record_limit);
        }

        self.progress.finish();
        Ok(self.records.len())
    }

    fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    fn freshness(&self) -> Option<NaiveDate> {
        self.state.as_ref().map(PaginationState::last_updated)
    }
}

/// Factory for the recall builder; uses the supplied endpoint
/// configuration or its defaults.
pub struct RecallBuilderFactory;

impl BuilderFactory for RecallBuilderFactory {
    fn build(
        &self,
        source_id: &str,
        params: BuilderParams,
    ) -> Result<Box<dyn DatasetBuilder>, AppError> {
        let config = params.api.unwrap_or_default();
        config.validate()?;

        let api = HttpEnforcementApi::new(&config)?;
        let mut builder = RecallBuilder::new(source_id, api, config.page_limit);
        if let Some(progress) = params.progress {
            builder = builder.with_progress(progress);
        }
        Ok(Box::new(builder))
    }
}
