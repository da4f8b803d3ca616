//! Source builder contract shared by the file and API variants.

use std::io::Write;

use chrono::NaiveDate;

use crate::domain::{AppError, CanonicalRecord};
use crate::ports::RecordStore;

/// Options for one acquisition call.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcquireOptions {
    /// Cap on records to retrieve. The API builder defaults to the total
    /// reported at initialization time; the file builder reads everything.
    pub record_limit: Option<u64>,
}

/// A source-specific builder owning its acquired canonical records.
///
/// Records are appended in acquisition order and never removed or
/// reordered. Builders live for the process lifetime inside the registry.
pub trait DatasetBuilder {
    /// Registry key this builder was resolved under.
    fn source_id(&self) -> &str;

    /// Acquire records from the upstream source, appending to the
    /// collection. Returns the number of records held afterwards.
    fn acquire(&mut self, options: &AcquireOptions) -> Result<usize, AppError>;

    /// Records acquired so far, in acquisition order.
    fn records(&self) -> &[CanonicalRecord];

    /// Remote dataset freshness date, when the source reports one.
    fn freshness(&self) -> Option<NaiveDate> {
        None
    }

    /// Write the flat-file export: a header row of canonical field names
    /// followed by one row per record, field order matching the header
    /// exactly.
    fn export_flat(&self, sink: &mut dyn Write) -> Result<usize, AppError> {
        let records = self.records();
        let first = records.first().ok_or(AppError::EmptyDataset)?;

        let mut writer = csv::WriterBuilder::new().from_writer(sink);
        writer.write_record(first.field_names())?;
        for record in records {
            writer.write_record(record.field_values())?;
        }
        writer.flush()?;

        Ok(records.len())
    }

    /// Hand every record to the store collaborator, committing once at the
    /// end of the batch.
    fn export_store(&self, store: &mut dyn RecordStore) -> Result<usize, AppError> {
        let records = self.records();
        if records.is_empty() {
            return Err(AppError::EmptyDataset);
        }

        for record in records {
            store.add(record)?;
        }
        store.commit()?;

        Ok(records.len())
    }
}
