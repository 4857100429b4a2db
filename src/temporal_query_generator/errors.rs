use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

use crate::entity_catalog::EntityCatalogError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TemporalQueryError {
    #[error("Invalid {mode} range: start {start} is after end {end}")]
    InvalidRange {
        mode: &'static str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("Local time {local} cannot be mapped to an offset in the time zone")]
    NonexistentLocalTime { local: NaiveDateTime },
    #[error(transparent)]
    Catalog(#[from] EntityCatalogError),
}

impl TemporalQueryError {
    /// True for `UnmappedEntity` lookups surfaced through the resolver
    pub fn is_unmapped_entity(&self) -> bool {
        matches!(
            self,
            TemporalQueryError::Catalog(EntityCatalogError::UnmappedEntity { .. })
        )
    }

    pub fn is_invalid_range(&self) -> bool {
        matches!(self, TemporalQueryError::InvalidRange { .. })
    }
}
