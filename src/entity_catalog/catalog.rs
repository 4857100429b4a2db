use std::collections::HashMap;

use super::entity_mapping::{EntityDescriptor, EntityMapping, TableMapping};

/// In-memory entity-to-table lookup.
///
/// Built once (from YAML or code) and then only read, so a catalog can be
/// shared behind an `Arc` by any number of resolvers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityCatalog {
    entities: HashMap<String, TableMapping>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mappings(entities: HashMap<String, TableMapping>) -> Self {
        EntityCatalog { entities }
    }

    /// Register or replace the mapping of an entity
    pub fn insert(&mut self, entity: impl Into<String>, mapping: TableMapping) {
        self.entities.insert(entity.into(), mapping);
    }

    /// Builder-style variant of [`EntityCatalog::insert`]
    pub fn with_entity(mut self, entity: impl Into<String>, mapping: TableMapping) -> Self {
        self.insert(entity, mapping);
        self
    }

    pub fn get(&self, entity: &str) -> Option<&TableMapping> {
        self.entities.get(entity)
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.entities.contains_key(entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityMapping for EntityCatalog {
    fn table_mapping(&self, descriptor: &EntityDescriptor) -> Option<TableMapping> {
        self.entities.get(descriptor.name()).cloned()
    }
}
