//! Configuration module
//!
//! Handles loading of nbview.toml configuration files.
//! Defines Config, Page, and Display types.

mod types;

#[allow(unused_imports)]
pub use types::{Config, Display, Page};

use crate::error::{NbviewError, Result};
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "nbview.toml";

/// Commented starter configuration written by `nbview config init`
pub const TEMPLATE: &str = "\
# nbview configuration

[page]
# Page title override; defaults to the notebook title or the file stem.
# title = \"My Report\"

# Emit a complete standalone page. Set to false to emit only the notebook
# markup, for embedding in another document.
standalone = true

[display]
# Show In [n]: / Out [n]: prompt gutters next to code and results.
show_prompts = true

# Language tag for code blocks when the notebook metadata records none.
fallback_language = \"python\"
";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        NbviewError::Config(format!(
            "Cannot read config from '{}': {}. Run 'nbview config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration for a command: an explicitly passed path must exist,
/// while a missing file at the default location means built-in defaults
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                load(default)
            } else {
                Ok(Config::default())
            }
        }
    }
}
