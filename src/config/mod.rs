//! Configuration Management
//!
//! Unified configuration system with hierarchical resolution:
//! 1. Built-in defaults
//! 2. Global config (~/.config/weavedoc/config.toml)
//! 3. Project config (.weavedoc.toml)
//! 4. Environment variables (WEAVEDOC_*)
//! 5. CLI arguments (highest priority)

mod loader;
mod types;

pub use loader::ConfigLoader;
#[cfg(test)]
pub(crate) use loader::env_lock;
pub use types::*;
