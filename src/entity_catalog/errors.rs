//! # Entity Catalog Error Types
//!
//! Errors raised while loading entity-to-table mappings or looking an entity up.
//!
//! ## Error Categories
//!
//! - **Lookup Errors**: an entity descriptor that no mapping knows about
//! - **Configuration Errors**: file I/O, YAML parsing and structural validation
//!
//! An unmapped entity is a programming or configuration defect. It is never
//! retried; callers fix the catalog or the descriptor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EntityCatalogError {
    #[error("No table mapping found for entity `{entity}`")]
    UnmappedEntity { entity: String },
    #[error("Entity `{entity}` is mapped more than once")]
    DuplicateEntity { entity: String },
    #[error("Failed to read catalog file: {error}")]
    ConfigReadError { error: String },
    #[error("Failed to parse catalog: {error}")]
    ConfigParseError { error: String },
    #[error("Invalid catalog: {message}")]
    InvalidConfig { message: String },
}
