//! fdadata: assemble normalized FDA regulatory datasets from heterogeneous
//! sources.
//!
//! Two upstream sources are supported: compliance actions from a
//! spreadsheet export and recall notices from the paginated openFDA
//! enforcement endpoint. Both are normalized into canonical records
//! suitable for flat-file export or bulk load into a relational store.

pub mod domain;
pub mod ports;
pub mod services;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;

use services::{ComplianceActionFactory, RecallBuilderFactory};

pub use domain::{AppError, CanonicalRecord, FetchConfig};
pub use services::{AcquireOptions, BuilderParams, BuilderRegistry, DatasetBuilder};

/// Source identifier for the compliance-actions spreadsheet.
pub const SOURCE_CITATIONS: &str = "CITATIONS";
/// Source identifier for the openFDA recall endpoint.
pub const SOURCE_USFDA_RECALL: &str = "USFDA_RECALL";

/// Registry with both built-in sources registered.
pub fn default_registry() -> BuilderRegistry {
    let mut registry = BuilderRegistry::new();
    registry.register(SOURCE_CITATIONS, Box::new(ComplianceActionFactory));
    registry.register(SOURCE_USFDA_RECALL, Box::new(RecallBuilderFactory));
    registry
}

/// Outcome of a fetch-and-export run.
#[derive(Debug, Clone)]
pub struct FetchSummary {
    /// Source the records came from.
    pub source_id: String,
    /// Records held by the builder after acquisition.
    pub records: usize,
    /// Remote dataset freshness date, when the source reports one.
    pub last_updated: Option<NaiveDate>,
}

/// Acquire a source through the registry and write its flat-file export.
pub fn fetch_to_csv(
    registry: &mut BuilderRegistry,
    source_id: &str,
    params: BuilderParams,
    options: &AcquireOptions,
    out: &Path,
) -> Result<FetchSummary, AppError> {
    let builder = registry.resolve(source_id, params)?;
    let records = builder.acquire(options)?;
    if records == 0 {
        // Nothing to export; leave the output path untouched.
        return Err(AppError::EmptyDataset);
    }

    let file = File::create(out)?;
    let mut sink = BufWriter::new(file);
    builder.export_flat(&mut sink)?;

    Ok(FetchSummary {
        source_id: source_id.to_string(),
        records,
        last_updated: builder.freshness(),
    })
}
