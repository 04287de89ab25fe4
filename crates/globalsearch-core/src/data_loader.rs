//! Loads the in-memory collections a host hands to the engine.
//!
//! A data directory may hold `locations.json` and `accounts.json`, each a JSON
//! array of records. A missing file leaves that collection unloaded.
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::DataBundle;

pub const LOCATIONS_FILE: &str = "locations.json";
pub const ACCOUNTS_FILE: &str = "accounts.json";

#[derive(Debug, Default)]
pub struct DataLoader;

impl DataLoader {
    pub fn new() -> Self { Self }

    pub fn load_dir(&self, data_dir: &Path) -> Result<DataBundle> {
        if !data_dir.is_dir() {
            tracing::warn!(dir = %data_dir.display(), "data directory not found; searching with no collections");
            return Ok(DataBundle::default());
        }
        let bundle = DataBundle {
            locations: self.load_collection(&data_dir.join(LOCATIONS_FILE))?,
            accounts: self.load_collection(&data_dir.join(ACCOUNTS_FILE))?,
        };
        tracing::debug!(
            dir = %data_dir.display(),
            locations = bundle.locations.as_ref().map_or(0, Vec::len),
            accounts = bundle.accounts.as_ref().map_or(0, Vec::len),
            "loaded data bundle"
        );
        Ok(bundle)
    }

    /// Reads a single JSON document shaped like [`DataBundle`].
    pub fn load_bundle_file(&self, path: &Path) -> Result<DataBundle> {
        let content = self.read_file_content(path)?;
        serde_json::from_str(&content).map_err(|e| Error::DataLoad { path: path.to_path_buf(), message: e.to_string() })
    }

    fn load_collection<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<Vec<T>>> {
        if !path.is_file() {
            tracing::debug!(file = %path.display(), "collection file absent");
            return Ok(None);
        }
        let content = self.read_file_content(path)?;
        let records = serde_json::from_str(&content)
            .map_err(|e| Error::DataLoad { path: path.to_path_buf(), message: e.to_string() })?;
        Ok(Some(records))
    }

    fn read_file_content(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::DataLoad { path: path.to_path_buf(), message: e.to_string() })
    }
}
