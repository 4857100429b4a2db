use super::catalog::EntityCatalog;
use super::entity_mapping::TableMapping;
use super::errors::EntityCatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use validator::Validate;

/// Entity catalog configuration management.
///
/// Catalogs are defined in YAML with the following structure:
///
/// ```yaml
/// name: hr                  # Optional catalog name
/// entities:
///   - entity: Employee      # Name the descriptor carries
///     schema: dbo           # Optional, defaults to the resolver's default schema
///     table: Employee       # Physical system-versioned table
///   - entity: Department
///     table: Departments
/// ```
///
/// # Usage
///
/// ```ignore
/// use temporal_sql::entity_catalog::EntityCatalogConfig;
///
/// let catalog = EntityCatalogConfig::from_yaml_file("catalog.yaml")?.to_catalog()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EntityCatalogConfig {
    /// Optional catalog name (used in log output only)
    #[serde(default)]
    pub name: Option<String>,
    /// Entity definitions
    #[validate(nested)]
    pub entities: Vec<EntityDefinition>,
}

/// Entity definition in catalog config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EntityDefinition {
    /// Entity name as carried by `EntityDescriptor`
    #[validate(length(min = 1, max = 128, message = "entity name must be 1-128 characters"))]
    pub entity: String,
    /// Schema owning the table
    #[serde(default)]
    #[validate(length(min = 1, max = 128, message = "schema must be 1-128 characters"))]
    pub schema: Option<String>,
    /// Table name
    #[validate(length(min = 1, max = 128, message = "table must be 1-128 characters"))]
    pub table: String,
}

impl EntityCatalogConfig {
    /// Load catalog configuration from YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, EntityCatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| EntityCatalogError::ConfigReadError {
            error: format!("{}: {}", path.display(), e),
        })?;

        Self::from_yaml_str(&contents)
    }

    /// Parse catalog configuration from YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EntityCatalogError> {
        serde_yaml::from_str(yaml).map_err(|e| EntityCatalogError::ConfigParseError {
            error: e.to_string(),
        })
    }

    /// Structural validation: field bounds and unique entity names
    pub fn validate_catalog(&self) -> Result<(), EntityCatalogError> {
        Validate::validate(self).map_err(|e| EntityCatalogError::InvalidConfig {
            message: e.to_string(),
        })?;

        let mut seen = HashSet::new();
        for def in &self.entities {
            if !seen.insert(def.entity.as_str()) {
                return Err(EntityCatalogError::DuplicateEntity {
                    entity: def.entity.clone(),
                });
            }
        }

        Ok(())
    }

    /// Validate and convert into a lookup catalog
    pub fn to_catalog(&self) -> Result<EntityCatalog, EntityCatalogError> {
        self.validate_catalog()?;

        let mappings: HashMap<String, TableMapping> = self
            .entities
            .iter()
            .map(|def| {
                (
                    def.entity.clone(),
                    TableMapping {
                        schema: def.schema.clone(),
                        table: def.table.clone(),
                    },
                )
            })
            .collect();

        log::debug!(
            "Loaded entity catalog '{}' with {} entities",
            self.name.as_deref().unwrap_or("default"),
            mappings.len()
        );

        Ok(EntityCatalog::from_mappings(mappings))
    }
}
