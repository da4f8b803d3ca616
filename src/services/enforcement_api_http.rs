//! Enforcement API client implementation using reqwest.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, PageParams, RawRecord, RecallApiConfig, RemoteMetadata};
use crate::ports::EnforcementApi;

const METADATA_DATE_FORMAT: &str = "%Y-%m-%d";

/// HTTP transport for the openFDA enforcement endpoint.
///
/// This client performs a single request per call. Recovery from a failed
/// page is the builder's resumable-cursor contract, not a retry here.
#[derive(Debug, Clone)]
pub struct HttpEnforcementApi {
    api_url: Url,
    client: Client,
}

impl HttpEnforcementApi {
    /// Create a new HTTP client from the endpoint configuration.
    pub fn new(config: &RecallApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }

    fn request(&self, query: &[(&str, String)]) -> Result<Envelope, String> {
        let response = self
            .client
            .get(self.api_url.clone())
            .query(query)
            .send()
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            return Err(extract_error_message(&body_text)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())));
        }

        serde_json::from_str(&body_text).map_err(|e| format!("Failed to parse response: {}", e))
    }
}

impl EnforcementApi for HttpEnforcementApi {
    fn fetch_metadata(&self) -> Result<RemoteMetadata, AppError> {
        // limit=1 keeps the metadata probe cheap; only the envelope is read.
        let envelope = self.request(&[("limit", "1".to_string())]).map_err(|reason| {
            AppError::SourceUnavailable { source_id: self.api_url.to_string(), reason }
        })?;

        let meta = envelope.meta.ok_or_else(|| AppError::SourceUnavailable {
            source_id: self.api_url.to_string(),
            reason: "Response envelope has no meta section".to_string(),
        })?;

        let last_updated = NaiveDate::parse_from_str(&meta.last_updated, METADATA_DATE_FORMAT)
            .map_err(|_| AppError::Normalization {
                field: "last_updated".to_string(),
                value: meta.last_updated.clone(),
            })?;

        Ok(RemoteMetadata { skip: meta.results.skip, total: meta.results.total, last_updated })
    }

    fn fetch_page(&self, params: PageParams) -> Result<Vec<RawRecord>, AppError> {
        let query =
            [("skip", params.skip.to_string()), ("limit", params.limit.to_string())];
        let envelope = self.request(&query).map_err(|message| AppError::Fetch {
            source_id: self.api_url.to_string(),
            skip: params.skip,
            message,
        })?;

        Ok(envelope.results)
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    results: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    last_updated: String,
    results: MetaResults,
}

#[derive(Debug, Deserialize)]
struct MetaResults {
    #[serde(default)]
    skip: u64,
    total: u64,
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
        .map(ToOwned::to_owned)
}
