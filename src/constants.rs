//! Global Constants
//!
//! Centralized defaults for configuration and file locations.

/// Text-generation defaults
pub mod llm {
    /// Provider used when nothing else is configured
    pub const PROVIDER: &str = "tgi";

    /// Request timeout (seconds)
    pub const TIMEOUT_SECS: u64 = 300;

    /// Generation budget per document
    pub const MAX_NEW_TOKENS: u32 = 1024;
}

/// File and directory names
pub mod paths {
    /// Project configuration read when `--project` is not given
    pub const PROJECT_FILE: &str = "tsconfig.json";

    /// Output root when neither CLI nor config names one
    pub const OUTPUT_DIR: &str = "docs";

    /// Template directory name, looked up next to the executable and in the
    /// working directory
    pub const TEMPLATES_DIR: &str = "templates";

    /// Extension of template files
    pub const TEMPLATE_EXT: &str = "md";

    /// Per-project tool configuration
    pub const PROJECT_CONFIG: &str = ".weavedoc.toml";

    /// Directory name under the XDG config home
    pub const APP_DIR: &str = "weavedoc";

    /// Prefix of configuration environment variables
    pub const ENV_PREFIX: &str = "WEAVEDOC_";
}
