//! Configuration file loading for stylegen
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STYLEGEN_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./stylegen.toml` or `./.stylegen.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/stylegen/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileOutputFormat, FileSubmissionConfig,
    FileWebhooksConfig,
};
pub use loader::ConfigLoader;
