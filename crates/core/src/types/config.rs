use std::fs;
use std::path::{Path, PathBuf};
use toml::Value;

use crate::error::{Error, Result};

pub const DEFAULT_MANIFEST: &str = "deployment-info.json";
pub const DEFAULT_OUTPUT_DIR: &str = "safe-txns";

/// Where to read the manifest from and where to put the batch files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub manifest: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl GeneratorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&config_content, path)
    }

    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let raw_config: Value = content.parse::<Value>().map_err(|e| Error::Config {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut config = Self::default();
        if let Some(manifest) = Self::get_path_value(&raw_config, "manifest", origin)? {
            config.manifest = manifest;
        }
        if let Some(output_dir) = Self::get_path_value(&raw_config, "output_dir", origin)? {
            config.output_dir = output_dir;
        }

        Ok(config)
    }

    fn get_path_value(raw_config: &Value, key: &str, origin: &Path) -> Result<Option<PathBuf>> {
        match raw_config.get(key) {
            None => Ok(None),
            Some(v) => v.as_str().map(|s| Some(PathBuf::from(s))).ok_or_else(|| {
                Error::Config {
                    path: origin.to_path_buf(),
                    reason: format!("{} must be a string", key),
                }
            }),
        }
    }
}
