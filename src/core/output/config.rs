//! Configuration for script generation
//!
//! Chooses the output sink and the layout grid once, before any graph is
//! built. Every field is optional in the serialized form.
use super::grid::Grid;
use crate::core::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Script file to write; standard output when unset
    pub output: Option<PathBuf>,
    /// Logical-to-pixel layout conversion
    pub grid: Grid,
}

impl ScriptConfig {
    /// Create a configuration writing to standard output with the default grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the script to a file instead of standard output
    ///
    /// # Arguments
    /// * `path` - Script file, created or truncated when the script starts
    ///
    /// # Returns
    /// A new configuration with the output file set
    pub fn with_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    /// Parse a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ScriptError;

    #[test]
    fn test_default_config() {
        let config = ScriptConfig::default();
        assert_eq!(config.output, None);
        assert_eq!(config.grid, Grid::default());
    }

    #[test]
    fn test_config_builder() {
        let config = ScriptConfig::new()
            .with_output("design.tcl")
            .with_grid(Grid::new().with_scale(1, 1));

        assert_eq!(config.output, Some(PathBuf::from("design.tcl")));
        assert_eq!(config.grid.x_scale, 1);
        assert_eq!(config.grid.y_scale, 1);
    }

    #[test]
    fn test_config_from_json() {
        let config = ScriptConfig::from_json_str(
            r#"{ "output": "out/design.tcl", "grid": { "cell": 50 } }"#,
        )
        .unwrap();

        assert_eq!(config.output, Some(PathBuf::from("out/design.tcl")));
        assert_eq!(config.grid.cell, 50);
        assert_eq!(config.grid.margin, 3);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ScriptConfig::from_json_str("{}").unwrap(), ScriptConfig::default());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = ScriptConfig::from_json_str("{ grid: ").unwrap_err();
        assert!(matches!(err, ScriptError::Config(_)));
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        std::fs::write(&path, r#"{ "grid": { "y_scale": 5 } }"#).unwrap();

        let config = ScriptConfig::from_file(&path).unwrap();
        assert_eq!(config.output, None);
        assert_eq!(config.grid.y_scale, 5);
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScriptConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ScriptError::Io(_)));
    }
}
