use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Typed value bound to a positional placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ParameterValue {
    /// Already normalized to UTC
    Timestamp(DateTime<Utc>),
}

impl ParameterValue {
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match *self {
            ParameterValue::Timestamp(ts) => Some(ts),
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Timestamp(ts) => {
                f.write_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
        }
    }
}

impl From<DateTime<Utc>> for ParameterValue {
    fn from(ts: DateTime<Utc>) -> Self {
        ParameterValue::Timestamp(ts)
    }
}

/// A statement template and the values for its placeholders, in order.
///
/// Built fresh for every call and never modified afterwards; the executor
/// binds `parameters` positionally against the placeholders in `sql`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalStatement {
    sql: String,
    parameters: Vec<ParameterValue>,
}

impl TemporalStatement {
    pub(crate) fn new(sql: String, parameters: Vec<ParameterValue>) -> Self {
        TemporalStatement { sql, parameters }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn parameters(&self) -> &[ParameterValue] {
        &self.parameters
    }

    pub fn into_parts(self) -> (String, Vec<ParameterValue>) {
        (self.sql, self.parameters)
    }
}

impl fmt::Display for TemporalStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}
