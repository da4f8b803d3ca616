//! Builder registry: one lazily-constructed builder per source identifier.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::{AppError, RecallApiConfig};
use crate::ports::ProgressListener;
use crate::services::DatasetBuilder;

/// Construction arguments handed to a factory on first resolution.
///
/// Arguments supplied on later resolutions of the same source are ignored;
/// the existing instance wins.
#[derive(Default)]
pub struct BuilderParams {
    /// Backing file for file-based sources.
    pub path: Option<PathBuf>,
    /// Endpoint configuration for API-based sources.
    pub api: Option<RecallApiConfig>,
    /// Progress listener for interactive acquisition runs.
    pub progress: Option<Box<dyn ProgressListener>>,
}

/// Factory constructing one builder from its parameters.
pub trait BuilderFactory {
    fn build(
        &self,
        source_id: &str,
        params: BuilderParams,
    ) -> Result<Box<dyn DatasetBuilder>, AppError>;
}

struct Entry {
    factory: Box<dyn BuilderFactory>,
    instance: Option<Box<dyn DatasetBuilder>>,
}

/// Maps source identifiers to identity-stable builder instances.
///
/// The registry exclusively owns every entry; at most one live builder
/// exists per key for the process lifetime. Repeated resolutions of the
/// same key collapse onto the one instance, so repeated acquisition
/// requests reuse already-fetched data.
#[derive(Default)]
pub struct BuilderRegistry {
    entries: HashMap<String, Entry>,
}

impl BuilderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a source identifier with a builder factory.
    pub fn register(&mut self, source_id: impl Into<String>, factory: Box<dyn BuilderFactory>) {
        self.entries.insert(source_id.into(), Entry { factory, instance: None });
    }

    /// Registered source identifiers, sorted.
    pub fn source_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Resolve a source identifier to its builder, constructing it on the
    /// first call only.
    pub fn resolve(
        &mut self,
        source_id: &str,
        params: BuilderParams,
    ) -> Result<&mut (dyn DatasetBuilder + 'static), AppError> {
        let entry = self
            .entries
            .get_mut(source_id)
            .ok_or_else(|| AppError::UnknownSource(source_id.to_string()))?;

        if entry.instance.is_none() {
            entry.instance = Some(entry.factory.build(source_id, params)?);
        }

        entry
            .instance
            .as_deref_mut()
            .ok_or_else(|| AppError::UnknownSource(source_id.to_string()))
    }
}
