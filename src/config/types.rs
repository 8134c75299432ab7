use serde::{Deserialize, Serialize};

/// Nbview configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for the emitted HTML page
    pub page: Page,

    /// Display settings shared by the page and terminal surfaces
    pub display: Display,
}

/// Settings for the emitted HTML page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Page title override; when unset the notebook title or the input
    /// file stem is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Emit a complete page with shell and styles; false emits only the
    /// notebook markup for embedding
    pub standalone: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Show In [n]: / Out [n]: prompt gutters
    pub show_prompts: bool,

    /// Code block language tag when the notebook metadata records none
    pub fallback_language: String,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            title: None,
            standalone: true,
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self {
            show_prompts: true,
            fallback_language: "python".to_string(),
        }
    }
}
