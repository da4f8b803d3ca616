pub mod config;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod record;

pub use config::{
    ComplianceFileConfig, FetchConfig, RecallApiConfig, load_config, parse_config_content,
};
pub use error::AppError;
pub use normalize::{RawRecord, canonical_field_name};
pub use pagination::{PageParams, PaginationState, RemoteMetadata};
pub use record::{CanonicalRecord, ComplianceAction, RecallNotice};
