//! `FOR SYSTEM_TIME` statement generation
//!
//! Each mode maps to a fixed clause shape: literal SQL fragments with one
//! placeholder between each adjacent pair. Timestamps only ever travel in the
//! parameter list, so no caller-supplied value reaches the template text.

use super::common::PlaceholderStyle;
use super::errors::TemporalQueryError;
use super::statement::{ParameterValue, TemporalStatement};
use super::table_name_resolver::QualifiedName;
use super::temporal_mode::TemporalMode;
use crate::config::TemporalSqlConfig;

const ALL_CLAUSE: &[&str] = &["ALL"];
const AS_OF_CLAUSE: &[&str] = &["AS OF ", ""];
const FROM_TO_CLAUSE: &[&str] = &["FROM ", " TO ", ""];
const BETWEEN_CLAUSE: &[&str] = &["BETWEEN ", " AND ", ""];
const CONTAINED_IN_CLAUSE: &[&str] = &["CONTAINED IN (", ", ", ")"];

fn clause_shape(mode: &TemporalMode) -> &'static [&'static str] {
    match mode {
        TemporalMode::All => ALL_CLAUSE,
        TemporalMode::AsOf { .. } => AS_OF_CLAUSE,
        TemporalMode::FromTo { .. } => FROM_TO_CLAUSE,
        TemporalMode::Between { .. } => BETWEEN_CLAUSE,
        TemporalMode::ContainedIn { .. } => CONTAINED_IN_CLAUSE,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemporalClauseBuilder {
    placeholder_style: PlaceholderStyle,
}

impl TemporalClauseBuilder {
    pub fn new(placeholder_style: PlaceholderStyle) -> Self {
        TemporalClauseBuilder { placeholder_style }
    }

    pub fn from_config(config: &TemporalSqlConfig) -> Self {
        Self::new(config.placeholder_style)
    }

    pub fn placeholder_style(&self) -> PlaceholderStyle {
        self.placeholder_style
    }

    /// Build `SELECT * FROM {table} FOR SYSTEM_TIME <clause>` for `mode`.
    ///
    /// # Errors
    /// `InvalidRange` when a range mode has `start > end`. Nothing is built
    /// in that case.
    pub fn build(
        &self,
        table: &QualifiedName,
        mode: &TemporalMode,
    ) -> Result<TemporalStatement, TemporalQueryError> {
        mode.validate()?;

        let parameters: Vec<ParameterValue> = mode
            .timestamps()
            .into_iter()
            .map(ParameterValue::from)
            .collect();

        let shape = clause_shape(mode);
        debug_assert_eq!(shape.len(), parameters.len() + 1);

        let mut sql = format!("SELECT * FROM {} FOR SYSTEM_TIME ", table);
        for (index, fragment) in shape.iter().enumerate() {
            if index > 0 {
                sql.push_str(&self.placeholder_style.placeholder(index - 1));
            }
            sql.push_str(fragment);
        }

        log::debug!(
            "Built {} statement: {} ({} parameters)",
            mode.name(),
            sql,
            parameters.len()
        );

        Ok(TemporalStatement::new(sql, parameters))
    }
}

/// Build with the default placeholder style (`?`)
pub fn build_temporal_statement(
    table: &QualifiedName,
    mode: &TemporalMode,
) -> Result<TemporalStatement, TemporalQueryError> {
    TemporalClauseBuilder::default().build(table, mode)
}
