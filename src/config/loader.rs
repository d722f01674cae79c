//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/weavedoc/config.toml)
//! 3. Project config (.weavedoc.toml, or the `--config` path)
//! 4. Environment variables (WEAVEDOC_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::constants::paths;
use crate::types::{DocError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → global → project (or `explicit`) → env vars
    ///
    /// An explicit path must exist; the implicit ones are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.is_file()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        match explicit {
            Some(path) if !path.is_file() => {
                return Err(DocError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => {
                debug!("Loading config from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let project_path = Self::project_config_path();
                if project_path.is_file() {
                    debug!("Loading project config from: {}", project_path.display());
                    figment = figment.merge(Toml::file(&project_path));
                }
            }
        }

        // WEAVEDOC_LLM_MAX_NEW_TOKENS -> llm.max_new_tokens
        figment = figment.merge(Self::env());

        Self::extract(figment)
    }

    fn env() -> Env {
        Env::prefixed(paths::ENV_PREFIX)
            .map(|key| key.as_str().replacen('_', ".", 1).into())
            .lowercase(true)
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| DocError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/weavedoc/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join(paths::APP_DIR))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(paths::PROJECT_CONFIG)
    }
}

/// Serializes tests that load configuration, since every load reads the
/// process environment.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
