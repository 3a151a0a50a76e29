use std::path::Path;

use db::record::RecordKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use ts_rs::TS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
pub struct Config {
    /// Fill every log with two example records when all of them are empty.
    pub seed_sample_data: bool,
    pub storage_keys: StorageKeys,
}

/// Storage slot per record variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
pub struct StorageKeys {
    pub batches: String,
    pub orders: String,
    pub stock: String,
    pub cleaning: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            batches: RecordKind::Batch.default_storage_key().to_string(),
            orders: RecordKind::Order.default_storage_key().to_string(),
            stock: RecordKind::StockItem.default_storage_key().to_string(),
            cleaning: RecordKind::CleaningLog.default_storage_key().to_string(),
        }
    }
}

impl StorageKeys {
    pub fn for_kind(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Batch => &self.batches,
            RecordKind::Order => &self.orders,
            RecordKind::StockItem => &self.stock,
            RecordKind::CleaningLog => &self.cleaning,
        }
    }
}

/// Reads the config file. A missing or malformed file yields the defaults.
pub fn load_config_from_file(config_path: &Path) -> Config {
    match std::fs::read_to_string(config_path) {
        Ok(raw) => match serde_json::from_str::<Config>(&raw) {
            Ok(config) => {
                info!(path = %config_path.display(), "Loaded config");
                config
            }
            Err(e) => {
                warn!(
                    path = %config_path.display(),
                    error = %e,
                    "Malformed config, using defaults"
                );
                Config::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %config_path.display(), "No config file, using defaults");
            Config::default()
        }
        Err(e) => {
            warn!(
                path = %config_path.display(),
                error = %e,
                "Failed to read config, using defaults"
            );
            Config::default()
        }
    }
}

pub fn save_config_to_file(config: &Config, config_path: &Path) -> Result<(), ConfigError> {
    let raw = serde_json::to_string_pretty(config)?;
    std::fs::write(config_path, raw)?;
    Ok(())
}
