//! temporal-sql - `FOR SYSTEM_TIME` statements for system-versioned tables
//!
//! This crate turns an entity descriptor and a temporal mode into a
//! parameterized statement, ready for an external executor:
//! - Entity → quoted `schema.table` resolution through a pluggable mapping
//! - `ALL`, `AS OF`, `FROM .. TO`, `BETWEEN .. AND`, `CONTAINED IN` clauses
//! - Timestamps normalized to UTC and bound only as parameters
//!
//! Connection handling, row materialization and change tracking belong to the
//! surrounding data-access layer.

pub mod config;
pub mod entity_catalog;
pub mod executor;
pub mod temporal_queries;
pub mod temporal_query_generator;

pub use config::{ConfigError, TemporalSqlConfig};
pub use entity_catalog::{EntityDescriptor, EntityMapping, TableMapping, TemporalEntity};
pub use executor::{FetchError, TemporalExecutor};
pub use temporal_queries::TemporalQueries;
pub use temporal_query_generator::{
    ParameterValue, QualifiedName, TableNameResolver, TemporalClauseBuilder, TemporalMode,
    TemporalQueryError, TemporalStatement,
};
