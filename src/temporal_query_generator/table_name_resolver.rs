//! Entity descriptor → quoted `schema.table` name.

use std::fmt;

use super::common::{qualified_table, IdentifierQuoting};
use super::errors::TemporalQueryError;
use crate::config::{TemporalSqlConfig, DEFAULT_SCHEMA};
use crate::entity_catalog::{EntityCatalogError, EntityDescriptor, EntityMapping};

/// Fully quoted `schema.table` identifier, safe to splice into SQL text.
///
/// Only constructible through quoting, so the builder never sees a raw name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName(String);

impl QualifiedName {
    pub fn new(schema: &str, table: &str, quoting: IdentifierQuoting) -> Self {
        QualifiedName(qualified_table(schema, table, quoting))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct TableNameResolver<M> {
    mapping: M,
    quoting: IdentifierQuoting,
    default_schema: String,
}

impl<M: EntityMapping> TableNameResolver<M> {
    /// Square-bracket quoting, `dbo` as the default schema
    pub fn new(mapping: M) -> Self {
        TableNameResolver {
            mapping,
            quoting: IdentifierQuoting::default(),
            default_schema: DEFAULT_SCHEMA.to_string(),
        }
    }

    pub fn with_config(mapping: M, config: &TemporalSqlConfig) -> Self {
        TableNameResolver {
            mapping,
            quoting: config.identifier_quoting,
            default_schema: config.default_schema.clone(),
        }
    }

    pub fn mapping(&self) -> &M {
        &self.mapping
    }

    pub fn quoting(&self) -> IdentifierQuoting {
        self.quoting
    }

    /// Resolve a descriptor to its quoted table name.
    ///
    /// # Errors
    /// `UnmappedEntity` (through `TemporalQueryError::Catalog`) when the
    /// mapping layer does not know the descriptor, `InvalidConfig` when it
    /// maps the descriptor to a blank table name.
    pub fn resolve(
        &self,
        descriptor: &EntityDescriptor,
    ) -> Result<QualifiedName, TemporalQueryError> {
        let mapping = self.mapping.table_mapping(descriptor).ok_or_else(|| {
            log::warn!("No table mapping registered for entity '{}'", descriptor);
            EntityCatalogError::UnmappedEntity {
                entity: descriptor.name().to_string(),
            }
        })?;

        if mapping.table.trim().is_empty() {
            log::warn!("Entity '{}' is mapped to an empty table name", descriptor);
            return Err(EntityCatalogError::InvalidConfig {
                message: format!("entity `{}` is mapped to an empty table name", descriptor),
            }
            .into());
        }

        // A blank schema counts as no schema
        let schema = mapping
            .schema
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.default_schema);
        Ok(QualifiedName::new(schema, &mapping.table, self.quoting))
    }
}
