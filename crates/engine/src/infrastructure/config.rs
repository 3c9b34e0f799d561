//! Engine configuration from the environment.
//!
//! Supported environment variables:
//! - CHARFORGE_DATA_DIR: Directory for saved characters (default `./characters`)
//! - CHARFORGE_DICE_SEED: Seed for reproducible dice (`u64`, unset = entropy)
//! - CHARFORGE_STAT_EDIT_POLICY: `preserve` or `invalidate` (default `preserve`)
//! - CHARFORGE_RACES_PATH / CHARFORGE_CAREERS_PATH: JSON files replacing the
//!   built-in race / career data
//!
//! Invalid values are logged and ignored, like the rest of the engine's
//! env overrides.

use std::path::{Path, PathBuf};

use charforge_domain::catalog::{BUILTIN_CAREERS, BUILTIN_RACES};
use charforge_domain::{Catalog, CatalogError, StatEditPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const DEFAULT_DATA_DIR: &str = "./characters";

/// Errors loading configured resources.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub data_dir: PathBuf,
    pub dice_seed: Option<u64>,
    pub stat_edit_policy: StatEditPolicy,
    pub races_path: Option<PathBuf>,
    pub careers_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            dice_seed: None,
            stat_edit_policy: StatEditPolicy::default(),
            races_path: None,
            careers_path: None,
        }
    }
}

impl EngineConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(dir) = var("CHARFORGE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(val) = var("CHARFORGE_DICE_SEED") {
            match val.parse::<u64>() {
                Ok(seed) => {
                    config.dice_seed = Some(seed);
                    tracing::info!(seed, "Applied CHARFORGE_DICE_SEED environment variable");
                }
                Err(_) => tracing::warn!(
                    val = %val,
                    "CHARFORGE_DICE_SEED is not a valid u64, ignoring"
                ),
            }
        }

        if let Some(val) = var("CHARFORGE_STAT_EDIT_POLICY") {
            match val.parse::<StatEditPolicy>() {
                Ok(policy) => config.stat_edit_policy = policy,
                Err(e) => tracing::warn!(
                    val = %val,
                    error = %e,
                    "CHARFORGE_STAT_EDIT_POLICY not recognised, ignoring"
                ),
            }
        }

        config.races_path = var("CHARFORGE_RACES_PATH").map(PathBuf::from);
        config.careers_path = var("CHARFORGE_CAREERS_PATH").map(PathBuf::from);
        config
    }

    /// Dice source: seeded when configured, otherwise from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.dice_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Built-in catalog, with either collection replaced by its configured file.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let races = read_or(self.races_path.as_deref(), BUILTIN_RACES)?;
        let careers = read_or(self.careers_path.as_deref(), BUILTIN_CAREERS)?;
        let catalog = Catalog::from_json(&races, &careers)?;
        tracing::debug!(
            races = catalog.races().len(),
            careers = catalog.careers().len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }
}

fn read_or(path: Option<&Path>, builtin: &str) -> Result<String, ConfigError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => Ok(builtin.to_string()),
    }
}
