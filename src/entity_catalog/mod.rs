pub mod catalog;
pub mod config;
pub mod entity_mapping;
pub mod errors;

pub use catalog::EntityCatalog;
pub use config::{EntityCatalogConfig, EntityDefinition};
pub use entity_mapping::{EntityDescriptor, EntityMapping, TableMapping, TemporalEntity};
pub use errors::EntityCatalogError;
