use crate::combinatorics::DEFAULT_SAMPLE_SIZE;
use crate::error::{ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermutationConfig {
    /// How many permutations the sampler prints.
    pub sample_size: usize,
}

impl Default for PermutationConfig {
    fn default() -> Self {
        PermutationConfig {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureConfig {
    /// Decimal places written for converted Fahrenheit values.
    pub precision: usize,
    /// Appended to the input file stem to name the output file.
    pub output_suffix: String,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        TemperatureConfig {
            precision: 2,
            output_suffix: "_processed".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub permutations: PermutationConfig,
    pub temperature: TemperatureConfig,
}

impl ToolConfig {
    pub fn from_toml_str(text: &str) -> ToolResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> ToolResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ToolError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads `path` when given, otherwise falls back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> ToolResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
