//! Typed entry points over a mapping: one method per `FOR SYSTEM_TIME` form.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use temporal_sql::entity_catalog::{EntityCatalog, TableMapping};
//! use temporal_sql::{TemporalEntity, TemporalQueries};
//!
//! struct Employee;
//!
//! impl TemporalEntity for Employee {
//!     const ENTITY_NAME: &'static str = "Employee";
//! }
//!
//! let catalog = EntityCatalog::new().with_entity("Employee", TableMapping::new("dbo", "Employee"));
//! let queries = TemporalQueries::new(catalog);
//!
//! let statement = queries.as_of::<Employee, _>(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())?;
//! assert_eq!(statement.sql(), "SELECT * FROM [dbo].[Employee] FOR SYSTEM_TIME AS OF ?");
//! # Ok::<(), temporal_sql::TemporalQueryError>(())
//! ```

use chrono::{DateTime, TimeZone};

use crate::config::TemporalSqlConfig;
use crate::entity_catalog::{EntityDescriptor, EntityMapping, TemporalEntity};
use crate::executor::{FetchError, TemporalExecutor};
use crate::temporal_query_generator::{
    TableNameResolver, TemporalClauseBuilder, TemporalMode, TemporalQueryError, TemporalStatement,
};

#[derive(Debug, Clone)]
pub struct TemporalQueries<M> {
    resolver: TableNameResolver<M>,
    builder: TemporalClauseBuilder,
}

impl<M: EntityMapping> TemporalQueries<M> {
    pub fn new(mapping: M) -> Self {
        TemporalQueries {
            resolver: TableNameResolver::new(mapping),
            builder: TemporalClauseBuilder::default(),
        }
    }

    pub fn with_config(mapping: M, config: &TemporalSqlConfig) -> Self {
        TemporalQueries {
            resolver: TableNameResolver::with_config(mapping, config),
            builder: TemporalClauseBuilder::from_config(config),
        }
    }

    pub fn resolver(&self) -> &TableNameResolver<M> {
        &self.resolver
    }

    pub fn builder(&self) -> &TemporalClauseBuilder {
        &self.builder
    }

    /// Resolve the entity's table, then build the statement for `mode`.
    pub fn statement(
        &self,
        descriptor: &EntityDescriptor,
        mode: &TemporalMode,
    ) -> Result<TemporalStatement, TemporalQueryError> {
        let table = self.resolver.resolve(descriptor)?;
        self.builder.build(&table, mode)
    }

    /// Every row version, current and history
    pub fn all<E: TemporalEntity>(&self) -> Result<TemporalStatement, TemporalQueryError> {
        self.statement(&EntityDescriptor::of::<E>(), &TemporalMode::All)
    }

    /// Row versions valid at `instant`
    pub fn as_of<E: TemporalEntity, Tz: TimeZone>(
        &self,
        instant: DateTime<Tz>,
    ) -> Result<TemporalStatement, TemporalQueryError> {
        self.statement(&EntityDescriptor::of::<E>(), &TemporalMode::as_of(instant))
    }

    /// Row versions active at any time in `[start, end)`
    pub fn from_to<E: TemporalEntity, S: TimeZone, T: TimeZone>(
        &self,
        start: DateTime<S>,
        end: DateTime<T>,
    ) -> Result<TemporalStatement, TemporalQueryError> {
        self.statement(&EntityDescriptor::of::<E>(), &TemporalMode::from_to(start, end))
    }

    /// Like [`TemporalQueries::from_to`], plus versions starting exactly at `end`
    pub fn between<E: TemporalEntity, S: TimeZone, T: TimeZone>(
        &self,
        start: DateTime<S>,
        end: DateTime<T>,
    ) -> Result<TemporalStatement, TemporalQueryError> {
        self.statement(&EntityDescriptor::of::<E>(), &TemporalMode::between(start, end))
    }

    /// Row versions opened and closed within `[start, end]`
    pub fn contained_in<E: TemporalEntity, S: TimeZone, T: TimeZone>(
        &self,
        start: DateTime<S>,
        end: DateTime<T>,
    ) -> Result<TemporalStatement, TemporalQueryError> {
        self.statement(
            &EntityDescriptor::of::<E>(),
            &TemporalMode::contained_in(start, end),
        )
    }

    /// Build the statement and hand it to `executor`.
    ///
    /// Build errors are returned before the executor is called.
    pub async fn fetch<X: TemporalExecutor>(
        &self,
        executor: &X,
        descriptor: &EntityDescriptor,
        mode: &TemporalMode,
    ) -> Result<Vec<X::Row>, FetchError<X::Error>> {
        let statement = self.statement(descriptor, mode)?;
        executor.execute(statement).await.map_err(FetchError::Execute)
    }
}
