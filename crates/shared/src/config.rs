//! Configuration types for innkeep

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::StoreError;

/// What a repository does when asked to create a record whose key already exists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Append anyway; keys are a convention only
    #[default]
    Allow,
    /// Fail the create and leave the file untouched
    Reject,
}

/// What a mutating operation does when its backing file is corrupt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Treat the file as empty and overwrite it
    #[default]
    Reset,
    /// Fail the operation and keep the corrupt bytes on disk
    Refuse,
}

/// Where the collection files live and how repositories treat them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Directory the collection files are resolved against
    pub data_dir: PathBuf,

    pub hotels_file: String,
    pub customers_file: String,
    pub reservations_file: String,

    /// Seed dataset used by the fixture loader
    pub seed_file: String,

    pub duplicates: DuplicatePolicy,
    pub on_corrupt: CorruptPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            hotels_file: "hotels.json".to_string(),
            customers_file: "customers.json".to_string(),
            reservations_file: "reservations.json".to_string(),
            seed_file: "test_data.json".to_string(),
            duplicates: DuplicatePolicy::default(),
            on_corrupt: CorruptPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Default configuration rooted in `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("json") | None => serde_json::from_str(&content)?,
            Some(other) => {
                return Err(StoreError::Config(format!(
                    "Unsupported config extension '.{}' for {}",
                    other,
                    path.display()
                )))
            }
        };
        Ok(config)
    }

    pub fn hotels_path(&self) -> PathBuf {
        self.data_dir.join(&self.hotels_file)
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(&self.customers_file)
    }

    pub fn reservations_path(&self) -> PathBuf {
        self.data_dir.join(&self.reservations_file)
    }

    pub fn seed_path(&self) -> PathBuf {
        self.data_dir.join(&self.seed_file)
    }
}
