mod builder;
mod compliance;
mod enforcement_api_http;
mod progress_indicatif;
mod recall;
mod registry;

pub use builder::{AcquireOptions, DatasetBuilder};
pub use compliance::{ComplianceActionBuilder, ComplianceActionFactory};
pub use enforcement_api_http::HttpEnforcementApi;
pub use progress_indicatif::TerminalProgress;
pub use recall::{RecallBuilder, RecallBuilderFactory};
pub use registry::{BuilderFactory, BuilderParams, BuilderRegistry};
