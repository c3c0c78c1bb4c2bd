//! dal-tool configuration
//!
//! Loaded from `--config <FILE>` or `<workspace>/dal-tool.toml`. Every key is
//! optional; `DAL_TOOL_PACKAGE` and `DAL_TOOL_OUTPUT_DIR` override the file.

use anyhow::{Context, Result};
use dal_schema::codegen::go_dal::DEFAULT_PACKAGE;
use dal_schema::GeneratorOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the workspace root
pub const CONFIG_FILE_NAME: &str = "dal-tool.toml";

const ENV_PACKAGE: &str = "DAL_TOOL_PACKAGE";
const ENV_OUTPUT_DIR: &str = "DAL_TOOL_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ToolConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Go package clause of the generated file
    #[serde(default = "default_package")]
    pub package: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the workspace root
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name used when the statement has no schema-qualified table name
    #[serde(default = "default_file_name")]
    pub default_file_name: String,
}

fn default_package() -> String {
    DEFAULT_PACKAGE.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_name() -> String {
    "output.go".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            default_file_name: default_file_name(),
        }
    }
}

impl ToolConfig {
    /// Load configuration for a workspace.
    ///
    /// An explicit path must exist. Without one, a missing
    /// `dal-tool.toml` yields the defaults.
    pub fn load(workspace: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = workspace.join(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::from_file(&path)?
                } else {
                    log::debug!(
                        "No {} in {}, using defaults",
                        CONFIG_FILE_NAME,
                        workspace.display()
                    );
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply overrides looked up by variable name
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(package) = lookup(ENV_PACKAGE).filter(|v| !v.trim().is_empty()) {
            self.generator.package = package.trim().to_string();
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.trim().is_empty()) {
            self.output.dir = PathBuf::from(dir.trim());
        }
    }

    /// Options handed to the code generator
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            package: self.generator.package.clone(),
        }
    }

    /// Directory generated files are written to
    pub fn output_dir(&self, workspace: &Path) -> PathBuf {
        workspace.join(&self.output.dir)
    }
}
