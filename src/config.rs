//! Configuration file support for deb-depgraph.
//!
//! The tool is driven by a JSON file (`config.json` by default) with a fixed
//! set of keys. The schema is the [`Config`] struct: unknown keys are
//! rejected, missing keys fail deserialization, and [`Config::validate`]
//! checks the values.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::shared::error::DepGraphError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILENAME: &str = "config.json";

/// Maximum length for the root package name
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for the root package version
const MAX_VERSION_LENGTH: usize = 100;

/// Configuration file schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root package to analyze
    pub package_name: String,
    /// URL of the compressed index, or a local path in test repository mode
    pub repository_url: String,
    /// Read `repository_url` as a local file instead of downloading it
    pub test_repository_mode: bool,
    /// Exact version of the root package
    pub version: String,
    /// File the Graphviz rendering of the graph is written to
    pub output_filename: String,
    /// Print the dependency tree to stdout
    pub ascii_tree_output: bool,
    /// Packages whose name contains this substring are excluded (empty = none)
    #[serde(default)]
    pub filter_substring: String,
}

impl Config {
    /// Checks value constraints that the schema alone cannot express
    pub fn validate(&self) -> Result<()> {
        require_non_empty("package_name", &self.package_name)?;
        require_non_empty("repository_url", &self.repository_url)?;
        require_non_empty("version", &self.version)?;
        require_non_empty("output_filename", &self.output_filename)?;

        require_token("package_name", &self.package_name, MAX_PACKAGE_NAME_LENGTH)?;
        require_token("version", &self.version, MAX_VERSION_LENGTH)?;

        if !self.test_repository_mode {
            let url = self.repository_url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid(
                    "repository_url",
                    "must be an http:// or https:// URL when test_repository_mode is false",
                ));
            }
        }

        Ok(())
    }

    /// Key/value pairs in schema order, for display
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("package_name", self.package_name.clone()),
            ("repository_url", self.repository_url.clone()),
            ("test_repository_mode", self.test_repository_mode.to_string()),
            ("version", self.version.clone()),
            ("output_filename", self.output_filename.clone()),
            ("ascii_tree_output", self.ascii_tree_output.to_string()),
            ("filter_substring", self.filter_substring.clone()),
        ]
    }

    /// Renders the configuration block printed by `--show-config`
    pub fn display(&self) -> String {
        let mut output = String::from("\n=== Configurations ===\n");
        for (key, value) in self.entries() {
            output.push_str(&format!("{}: {}\n", key, value));
        }
        output
    }
}

fn invalid(field: &str, reason: &str) -> anyhow::Error {
    DepGraphError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    Ok(())
}

/// Package names and versions are single tokens in the index
fn require_token(field: &str, value: &str, max_len: usize) -> Result<()> {
    if value.len() > max_len {
        return Err(invalid(
            field,
            &format!("is too long ({} bytes). Maximum: {} bytes", value.len(), max_len),
        ));
    }
    if value.chars().any(|c| c.is_whitespace() || c == ',') {
        return Err(invalid(field, "must not contain whitespace or commas"));
    }
    Ok(())
}

/// Load and validate the config at `path`.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    validate_regular_file(path, "config file").map_err(|e| DepGraphError::ConfigReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| DepGraphError::ConfigReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: Config =
        serde_json::from_str(&content).map_err(|e| DepGraphError::ConfigParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    config.validate()?;
    Ok(config)
}
