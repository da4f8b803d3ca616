//! Record store port definition.

use crate::domain::{AppError, CanonicalRecord};

/// Port for the bulk-load store collaborator.
///
/// The acquisition layer stages every record with `add` and commits exactly
/// once per export. Rollback of a half-applied batch is the store's concern,
/// not this layer's.
pub trait RecordStore {
    /// Stage one record.
    fn add(&mut self, record: &CanonicalRecord) -> Result<(), AppError>;

    /// Commit everything staged since the last commit.
    fn commit(&mut self) -> Result<(), AppError>;
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    staged: Vec<CanonicalRecord>,
    committed: Vec<CanonicalRecord>,
    commits: u32,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records committed so far, in insertion order.
    pub fn committed(&self) -> &[CanonicalRecord] {
        &self.committed
    }

    pub fn commit_count(&self) -> u32 {
        self.commits
    }
}

impl RecordStore for MemoryRecordStore {
    fn add(&mut self, record: &CanonicalRecord) -> Result<(), AppError> {
        self.staged.push(record.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), AppError> {
        self.committed.append(&mut self.staged);
        self.commits += 1;
        Ok(())
    }
}
