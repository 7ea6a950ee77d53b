//! Loader for the record collections backing each view.
//!
//! Datasets are JSON arrays stored in a data directory, one file per
//! [`Dataset`]. A file may also wrap its array as `{"data": [...]}`. When a file is
//! absent the bundled sample dataset is used instead, unless fallback is disabled.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{self, Dataset};
use crate::error::{MarketplaceError, Result};

/// Where a loaded dataset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    File(PathBuf),
    Bundled,
}

/// Reads dataset files from a data directory.
#[derive(Debug, Clone)]
pub struct DataSource {
    /// Directory holding the dataset files.
    pub data_dir: PathBuf,
    /// If true, missing files fall back to the bundled sample data.
    pub bundled_fallback: bool,
}

impl DataSource {
    /// Create a data source.
    ///
    /// If `data_dir` is `None`, uses [`config::default_data_dir`]. The directory
    /// does not need to exist, but if it does exist it must be a directory.
    pub fn new(data_dir: Option<PathBuf>, bundled_fallback: bool) -> Result<Self> {
        let dir = data_dir.unwrap_or_else(config::default_data_dir);
        if dir.exists() && !dir.is_dir() {
            return Err(MarketplaceError::InvalidArgument(format!(
                "data path {} is not a directory",
                dir.display()
            )));
        }
        Ok(Self {
            data_dir: dir,
            bundled_fallback,
        })
    }

    /// A data source that only serves the bundled sample data.
    pub fn bundled() -> Self {
        Self {
            data_dir: PathBuf::new(),
            bundled_fallback: true,
        }
    }

    /// Local path of a dataset file.
    pub fn path_for(&self, dataset: Dataset) -> PathBuf {
        self.data_dir.join(dataset.file_name())
    }

    /// Load the raw JSON payload of a dataset and report where it came from.
    pub fn load_json(&self, dataset: Dataset) -> Result<(Value, Origin)> {
        let path = self.path_for(dataset);
        if !self.data_dir.as_os_str().is_empty() && path.is_file() {
            let contents = fs::read_to_string(&path)?;
            let value: Value = serde_json::from_str(&contents)?;
            return Ok((value, Origin::File(path)));
        }
        if !self.bundled_fallback {
            return Err(MarketplaceError::NotFound(format!(
                "dataset file {} not found and bundled fallback is disabled",
                path.display()
            )));
        }
        if !self.data_dir.as_os_str().is_empty() {
            tracing::warn!(
                dataset = dataset.name(),
                path = %path.display(),
                "dataset file missing, using bundled sample data"
            );
        }
        let value: Value = serde_json::from_str(bundled_json(dataset))?;
        Ok((value, Origin::Bundled))
    }

    /// Load and deserialize a dataset into records.
    pub fn load<T: DeserializeOwned>(&self, dataset: Dataset) -> Result<Vec<T>> {
        let (value, origin) = self.load_json(dataset)?;
        let records: Vec<T> = serde_json::from_value(extract_data(value))?;
        match &origin {
            Origin::File(path) => tracing::info!(
                dataset = dataset.name(),
                records = records.len(),
                path = %path.display(),
                "loaded dataset from file"
            ),
            Origin::Bundled => tracing::info!(
                dataset = dataset.name(),
                records = records.len(),
                "loaded bundled dataset"
            ),
        }
        Ok(records)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Embedded sample data for a dataset.
pub fn bundled_json(dataset: Dataset) -> &'static str {
    match dataset {
        Dataset::Products => include_str!("../data/products.json"),
        Dataset::Orders => include_str!("../data/orders.json"),
        Dataset::Investments => include_str!("../data/investments.json"),
        Dataset::Documents => include_str!("../data/documents.json"),
    }
}

/// Extract the `"data"` field from a JSON wrapper, or return the value as-is
/// if there is no wrapper.
fn extract_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
