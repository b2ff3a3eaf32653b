use crate::error::ConfigError;
use crate::output_format::OutputFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Prefixes accepted when nothing else is configured
pub const DEFAULT_PREFIXES: &[&str] = &["core", "extensions"];

/// Delimiter used when nothing else is configured
pub const DEFAULT_DELIMITER: char = '(';

/// Input read when no path is given
pub const DEFAULT_INPUT: &str = "output.txt";

/// Configuration for pipeline behavior
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub prefixes: Vec<String>,
    pub delimiter: char,
    pub debug: bool,
    pub buffer_size: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
            delimiter: DEFAULT_DELIMITER,
            debug: false,
            buffer_size: 65536, // 64KB
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "buffer size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings read from a YAML config file. Every field is optional and
/// command-line flags win over anything set here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub prefixes: Option<Vec<String>>,
    pub delimiter: Option<char>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::FileNotFound {
                path: path.display().to_string(),
                source,
            })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // An empty document is a valid, empty config
        if content.trim().is_empty() {
            return Ok(FileConfig::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Fill the fields this file sets into a pipeline config
    pub fn apply_to(&self, config: &mut PipelineConfig) {
        if let Some(prefixes) = &self.prefixes {
            config.prefixes = prefixes.clone();
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
    }
}
