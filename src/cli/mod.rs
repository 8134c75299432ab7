//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - render: Convert notebooks to HTML pages
//! - show: Preview a notebook in the terminal
//! - config init: Initialize configuration file

pub mod config;
pub mod render;
pub mod show;

use std::fs;
use std::path::Path;

use crate::error::{NbviewError, Result};

/// True when the path has the .ipynb extension
fn is_notebook_path(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("ipynb")
}

/// Read a notebook file into raw JSON, guarding on the extension first
fn read_notebook_json(path: &Path) -> Result<serde_json::Value> {
    if !is_notebook_path(path) {
        return Err(NbviewError::Input(format!(
            "not a notebook file (expected .ipynb): {}",
            path.display()
        )));
    }

    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_notebook_path() {
        assert!(is_notebook_path(Path::new("analysis.ipynb")));
        assert!(is_notebook_path(Path::new("dir/analysis.ipynb")));
        assert!(!is_notebook_path(Path::new("analysis.json")));
        assert!(!is_notebook_path(Path::new("ipynb")));
    }

    #[test]
    fn test_read_notebook_json_rejects_extension() {
        let err = read_notebook_json(Path::new("notes.txt")).unwrap_err();
        assert!(err.to_string().contains("expected .ipynb"));
    }

    #[test]
    fn test_read_notebook_json_parses_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.ipynb");
        fs::write(&path, r#"{"cells": []}"#).unwrap();

        let value = read_notebook_json(&path).unwrap();
        assert!(value["cells"].is_array());
    }
}
