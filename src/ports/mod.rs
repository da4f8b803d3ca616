mod enforcement_api;
mod progress;
mod record_store;

pub use enforcement_api::EnforcementApi;
pub use progress::{NoopProgress, ProgressListener};
pub use record_store::{MemoryRecordStore, RecordStore};
