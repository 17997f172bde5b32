// Demo configuration management
// Loaded from a JSON file; every field has a default so a missing file is fine

use crate::catalog::Category;
use crate::error::{DemoError, Result};
use crate::generator::DEFAULT_GENERAL_PICKS;
use crate::record::DEFAULT_RECENT_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const SEED_ENV: &str = "ZEMEDIC_DEMO_SEED";

/// Upper bound on general recommendation draws per result
pub const MAX_GENERAL_PICKS: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub default_category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub general_picks: usize,
    pub recent_limit: usize,
    /// Simulated analysis delay before results appear
    pub latency_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            default_category: Category::Chest,
            seed: None,
            general_picks: DEFAULT_GENERAL_PICKS,
            recent_limit: DEFAULT_RECENT_LIMIT,
            latency_ms: 0,
        }
    }
}

impl DemoConfig {
    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing file yields the defaults. `ZEMEDIC_DEMO_SEED` overrides `seed`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_file_path()?,
        };

        let mut config = Self::load_file(&path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| DemoError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DemoError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(raw) = std::env::var(SEED_ENV) {
            let seed = raw.trim().parse::<u64>().map_err(|_| {
                DemoError::InvalidConfig(format!("{} must be an unsigned integer, got '{}'", SEED_ENV, raw))
            })?;
            self.seed = Some(seed);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.recent_limit == 0 {
            return Err(DemoError::InvalidConfig(
                "recent_limit must be at least 1".to_string(),
            ));
        }
        if self.general_picks > MAX_GENERAL_PICKS {
            return Err(DemoError::InvalidConfig(format!(
                "general_picks must be at most {}, got {}",
                MAX_GENERAL_PICKS, self.general_picks
            )));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| DemoError::ConfigIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| DemoError::ConfigSerialize {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| DemoError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the config file path
    pub fn config_file_path() -> Result<PathBuf> {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|dir| dir.join("zemedic").join("demo.json"))
            .ok_or(DemoError::NoConfigDir)
    }
}
