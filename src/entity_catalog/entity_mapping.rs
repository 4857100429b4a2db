//! Entity descriptors and the mapping capability that turns them into tables.
//!
//! The resolver never inspects a mapping framework's object graph. It only
//! asks an [`EntityMapping`] for the `(schema, table)` pair of a descriptor.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque handle identifying a mapped entity type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityDescriptor(Cow<'static, str>);

impl EntityDescriptor {
    pub const fn from_static(name: &'static str) -> Self {
        EntityDescriptor(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        EntityDescriptor(Cow::Owned(name.into()))
    }

    /// Descriptor of a type that declares its entity name
    pub fn of<E: TemporalEntity>() -> Self {
        Self::from_static(E::ENTITY_NAME)
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for EntityDescriptor {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for EntityDescriptor {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A Rust type whose rows live in a system-versioned table.
///
/// ```
/// use temporal_sql::TemporalEntity;
///
/// struct Employee;
///
/// impl TemporalEntity for Employee {
///     const ENTITY_NAME: &'static str = "Employee";
/// }
/// ```
pub trait TemporalEntity {
    const ENTITY_NAME: &'static str;
}

/// Physical location of an entity's table.
///
/// `schema` is optional; the resolver falls back to its configured default
/// schema when the mapping does not name one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMapping {
    #[serde(default)]
    pub schema: Option<String>,
    pub table: String,
}

impl TableMapping {
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        TableMapping {
            schema: Some(schema.into()),
            table: table.into(),
        }
    }

    /// Mapping that relies on the resolver's default schema
    pub fn unqualified(table: impl Into<String>) -> Self {
        TableMapping {
            schema: None,
            table: table.into(),
        }
    }
}

/// Lookup capability supplied by the surrounding data-access layer.
///
/// Implementations must not perform I/O beyond what they already cached;
/// the resolver calls this on every statement it builds.
pub trait EntityMapping {
    /// Returns `None` when the descriptor is not registered.
    fn table_mapping(&self, descriptor: &EntityDescriptor) -> Option<TableMapping>;
}

impl EntityMapping for HashMap<String, TableMapping> {
    fn table_mapping(&self, descriptor: &EntityDescriptor) -> Option<TableMapping> {
        self.get(descriptor.name()).cloned()
    }
}

impl<M: EntityMapping + ?Sized> EntityMapping for &M {
    fn table_mapping(&self, descriptor: &EntityDescriptor) -> Option<TableMapping> {
        (**self).table_mapping(descriptor)
    }
}

impl<M: EntityMapping + ?Sized> EntityMapping for Arc<M> {
    fn table_mapping(&self, descriptor: &EntityDescriptor) -> Option<TableMapping> {
        (**self).table_mapping(descriptor)
    }
}
