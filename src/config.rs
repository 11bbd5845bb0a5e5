//! Configuration file support for mdbom.
//!
//! Provides YAML-based configuration through `mdbom.config.yml` files,
//! including data structures, loading, validation and creation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::shared::{MdbomError, Result};

pub const CONFIG_FILENAME: &str = "mdbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Where BOMs and the template are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// BOM file, or directory of `.json` BOM files
    #[serde(default)]
    pub bom_file: String,
    /// Package type filter; empty keeps every package
    #[serde(default)]
    pub bom_type: String,
    #[serde(default)]
    pub template_file: String,
}

/// Where the rendered document is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub markdown_file: String,
}

/// Serialized form of [`ConfigFile`], without the unknown fields.
#[derive(Serialize)]
struct ConfigDocument<'a> {
    input: &'a InputConfig,
    output: &'a OutputConfig,
}

impl ConfigFile {
    pub fn new(
        bom_file: impl Into<String>,
        bom_type: impl Into<String>,
        template_file: impl Into<String>,
        markdown_file: impl Into<String>,
    ) -> Self {
        Self {
            input: InputConfig {
                bom_file: bom_file.into(),
                bom_type: bom_type.into(),
                template_file: template_file.into(),
            },
            output: OutputConfig {
                markdown_file: markdown_file.into(),
            },
            unknown_fields: HashMap::new(),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    if !path.is_file() {
        return Err(MdbomError::config("Unable to read provided config").into());
    }
    read_config(path)
}

/// Load `mdbom.config.yml` from `dir`. Returns an error if it is not found.
pub fn load_default_config(dir: &Path) -> Result<ConfigFile> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.is_file() {
        return Err(MdbomError::config("Unable to read default config").into());
    }
    read_config(&config_path)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    if !dir.join(CONFIG_FILENAME).exists() {
        return Ok(None);
    }

    load_default_config(dir).map(Some)
}

fn read_config(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        MdbomError::config(format!(
            "Failed to read config file: {}\nDetails: {}",
            path.display(),
            e
        ))
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        MdbomError::config(format!(
            "Failed to parse config file: {}\nDetails: {}\nEnsure the file contains valid YAML syntax.",
            path.display(),
            e
        ))
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Validate the configuration: BOM, template and markdown file must be set.
pub fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.input.bom_file.trim().is_empty() {
        return Err(MdbomError::config("Invalid BOM file").into());
    }
    if config.input.template_file.trim().is_empty() {
        return Err(MdbomError::config("Invalid template file").into());
    }
    if config.output.markdown_file.trim().is_empty() {
        return Err(MdbomError::config("Invalid markdown file").into());
    }
    Ok(())
}

/// Writes `config` to `path`, creating missing parent directories.
///
/// An existing file is only replaced when `force` is set.
pub fn create_config(config: &ConfigFile, path: &Path, force: bool) -> Result<()> {
    validate_config(config)?;

    if path.exists() && !force {
        return Err(MdbomError::config("Config file exists and no force arg provided").into());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| MdbomError::FileWriteError {
                path: parent.to_path_buf(),
                details: e.to_string(),
            })?;
        }
    }

    let document = ConfigDocument {
        input: &config.input,
        output: &config.output,
    };
    let content = serde_yaml_ng::to_string(&document)
        .map_err(|e| MdbomError::config(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, content).map_err(|e| MdbomError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
