//! File-based source builder for FDA compliance actions.

use std::path::PathBuf;

use crate::domain::{AppError, CanonicalRecord, canonical_field_name, normalize};
use crate::services::{AcquireOptions, BuilderFactory, BuilderParams, DatasetBuilder};

/// Builds the compliance-action dataset from a spreadsheet export.
///
/// The first row of the backing file is a header; header cells are
/// lowercased and whitespace-normalized to derive canonical field names.
pub struct ComplianceActionBuilder {
    source_id: String,
    path: PathBuf,
    records: Vec<CanonicalRecord>,
}

impl ComplianceActionBuilder {
    pub fn new(source_id: impl Into<String>, path: PathBuf) -> Self {
        Self { source_id: source_id.into(), path, records: Vec::new() }
    }
}

impl DatasetBuilder for ComplianceActionBuilder {
    fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Reads the whole file once, appending records in original row order.
    /// A second call would append a duplicate pass; the registry's
    /// per-source singleton is the designed guard against that.
    fn acquire(&mut self, _options: &AcquireOptions) -> Result<usize, AppError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| AppError::SourceUnavailable {
                source_id: self.source_id.clone(),
                reason: e.to_string(),
            })?;

        let header: Vec<String> = reader.headers()?.iter().map(canonical_field_name).collect();

        // Normalize the whole batch before committing any of it, so a bad
        // row leaves the collection untouched.
        let mut batch = Vec::new();
        for row in reader.records() {
            let row = row?;
            let cells: Vec<String> = row.iter().map(str::to_string).collect();
            let raw = normalize::raw_from_row(&header, &cells);
            let action = normalize::compliance_action_from_raw(&raw)?;
            batch.push(CanonicalRecord::ComplianceAction(action));
        }
        self.records.extend(batch);

        Ok(self.records.len())
    }

    fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }
}

/// Factory for the compliance builder; requires a spreadsheet path.
pub struct ComplianceActionFactory;

impl BuilderFactory for ComplianceActionFactory {
    fn build(
        &self,
        source_id: &str,
        params: BuilderParams,
    ) -> Result<Box<dyn DatasetBuilder>, AppError> {
        let path = params.path.ok_or_else(|| {
            AppError::config_error(format!("Source '{}' requires a spreadsheet path", source_id))
        })?;
        Ok(Box::new(ComplianceActionBuilder::new(source_id, path)))
    }
}
