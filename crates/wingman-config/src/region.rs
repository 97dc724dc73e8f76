use std::fs;
use std::path::PathBuf;

use wingman_core::error::ConfigError;
use wingman_core::ports::ConfigProvider;
use wingman_types::RegionConfig;

/// On-disk store for the calibrated region record. Written once by the
/// calibrator, re-read at the start of every suggestion cycle.
pub struct RegionStore {
    path: PathBuf,
}

impl RegionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn load(&self) -> Result<RegionConfig, ConfigError> {
        if !self.path.exists() {
            return Err(ConfigError::Missing(self.path.clone()));
        }
        let data = fs::read_to_string(&self.path)?;
        let config: RegionConfig = serde_json::from_str(&data)?;
        tracing::debug!(path = %self.path.display(), "region config loaded");
        Ok(config)
    }

    pub fn save(&self, config: &RegionConfig) -> anyhow::Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(config)?)?;
        tracing::info!(path = %self.path.display(), "region config saved");
        Ok(())
    }
}

impl ConfigProvider for RegionStore {
    fn load(&self) -> Result<RegionConfig, ConfigError> {
        RegionStore::load(self)
    }
}
