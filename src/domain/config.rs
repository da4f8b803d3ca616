//! Acquisition configuration domain models.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Largest page size the enforcement endpoint accepts.
const MAX_PAGE_LIMIT: u64 = 1000;

/// Configuration for dataset acquisition, loaded from `fdadata.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// Recall API configuration.
    #[serde(default)]
    pub recall: RecallApiConfig,
    /// Compliance spreadsheet configuration.
    #[serde(default)]
    pub compliance: ComplianceFileConfig,
}

impl FetchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.recall.validate()
    }
}

/// openFDA enforcement endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecallApiConfig {
    /// Enforcement API endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Page size for paginated retrieval.
    #[serde(default = "default_page_limit")]
    pub page_limit: u64,
}

impl Default for RecallApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            page_limit: default_page_limit(),
        }
    }
}

impl RecallApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.page_limit == 0 || self.page_limit > MAX_PAGE_LIMIT {
            return Err(AppError::config_error(format!(
                "page_limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }
        Ok(())
    }
}

/// Compliance actions spreadsheet configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComplianceFileConfig {
    /// Path to the spreadsheet export.
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

impl Default for ComplianceFileConfig {
    fn default() -> Self {
        Self { path: default_input_path() }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.fda.gov/food/enforcement.json").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_page_limit() -> u64 {
    MAX_PAGE_LIMIT
}

fn default_input_path() -> PathBuf {
    PathBuf::from("data/compliance_actions.csv")
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist.
pub fn load_config(path: &Path) -> Result<FetchConfig, AppError> {
    if !path.exists() {
        return Ok(FetchConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<FetchConfig, AppError> {
    let config: FetchConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
