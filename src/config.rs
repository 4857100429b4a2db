use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::temporal_query_generator::{IdentifierQuoting, PlaceholderStyle};

/// Schema used when a table mapping does not name one (SQL Server's default)
pub const DEFAULT_SCHEMA: &str = "dbo";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Statement generation settings with validation
#[derive(Clone, Debug, PartialEq, Validate, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemporalSqlConfig {
    /// How schema and table identifiers are quoted
    pub identifier_quoting: IdentifierQuoting,

    /// Token written for each positional parameter
    pub placeholder_style: PlaceholderStyle,

    /// Schema applied to mappings that do not name one
    #[validate(length(
        min = 1,
        max = 128,
        message = "Default schema must be between 1 and 128 characters"
    ))]
    pub default_schema: String,
}

impl Default for TemporalSqlConfig {
    fn default() -> Self {
        Self {
            identifier_quoting: IdentifierQuoting::SquareBracket,
            placeholder_style: PlaceholderStyle::QuestionMark,
            default_schema: DEFAULT_SCHEMA.to_string(),
        }
    }
}

impl TemporalSqlConfig {
    /// Parse and validate configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content.to_string(),
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from YAML file
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            field: "yaml_file".to_string(),
            value: "file read failed".to_string(),
            source: Box::new(e),
        })?;

        Self::from_yaml_str(&content)
    }
}
