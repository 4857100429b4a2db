//! `FOR SYSTEM_TIME` query shapes.
//!
//! Every timestamp a mode carries is stored as `DateTime<Utc>`. Constructors
//! accept any time zone and convert on the way in, so a mode can never hold
//! a timestamp in a reference other than the one the store compares against.
//!
//! Boundary semantics, for a row version valid over `[version_start, version_end)`:
//!
//! | Mode | Rows returned |
//! |---|---|
//! | `All` | every version, current and history |
//! | `AsOf(t)` | `version_start <= t < version_end` |
//! | `FromTo(s, e)` | `version_start < e && version_end > s` |
//! | `Between(s, e)` | `version_start <= e && version_end > s` |
//! | `ContainedIn(s, e)` | `version_start >= s && version_end <= e` |

use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};

use super::errors::TemporalQueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TemporalMode {
    /// Union of the current and history tables, no filtering
    All,
    /// Versions valid exactly at `instant`
    AsOf { instant: DateTime<Utc> },
    /// Versions active at any point in `[start, end)`
    FromTo {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Like `FromTo`, plus versions that begin exactly at `end`
    Between {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Versions opened and closed within `[start, end]`
    ContainedIn {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl TemporalMode {
    pub fn all() -> Self {
        TemporalMode::All
    }

    pub fn as_of<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        TemporalMode::AsOf {
            instant: instant.with_timezone(&Utc),
        }
    }

    pub fn from_to<S: TimeZone, E: TimeZone>(start: DateTime<S>, end: DateTime<E>) -> Self {
        TemporalMode::FromTo {
            start: start.with_timezone(&Utc),
            end: end.with_timezone(&Utc),
        }
    }

    pub fn between<S: TimeZone, E: TimeZone>(start: DateTime<S>, end: DateTime<E>) -> Self {
        TemporalMode::Between {
            start: start.with_timezone(&Utc),
            end: end.with_timezone(&Utc),
        }
    }

    pub fn contained_in<S: TimeZone, E: TimeZone>(start: DateTime<S>, end: DateTime<E>) -> Self {
        TemporalMode::ContainedIn {
            start: start.with_timezone(&Utc),
            end: end.with_timezone(&Utc),
        }
    }

    /// `AsOf` for a zone-less timestamp read in the host's local time zone
    pub fn as_of_local(instant: NaiveDateTime) -> Result<Self, TemporalQueryError> {
        Ok(TemporalMode::AsOf {
            instant: naive_to_utc(instant, &Local)?,
        })
    }

    pub fn from_to_local(
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, TemporalQueryError> {
        Ok(TemporalMode::FromTo {
            start: naive_to_utc(start, &Local)?,
            end: naive_to_utc(end, &Local)?,
        })
    }

    pub fn between_local(
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, TemporalQueryError> {
        Ok(TemporalMode::Between {
            start: naive_to_utc(start, &Local)?,
            end: naive_to_utc(end, &Local)?,
        })
    }

    pub fn contained_in_local(
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, TemporalQueryError> {
        Ok(TemporalMode::ContainedIn {
            start: naive_to_utc(start, &Local)?,
            end: naive_to_utc(end, &Local)?,
        })
    }

    /// Clause keyword, for logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            TemporalMode::All => "ALL",
            TemporalMode::AsOf { .. } => "AS OF",
            TemporalMode::FromTo { .. } => "FROM ... TO",
            TemporalMode::Between { .. } => "BETWEEN ... AND",
            TemporalMode::ContainedIn { .. } => "CONTAINED IN",
        }
    }

    /// `(start, end)` for the three range modes
    pub fn range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match *self {
            TemporalMode::FromTo { start, end }
            | TemporalMode::Between { start, end }
            | TemporalMode::ContainedIn { start, end } => Some((start, end)),
            TemporalMode::All | TemporalMode::AsOf { .. } => None,
        }
    }

    /// Timestamps in binding order
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        match *self {
            TemporalMode::All => Vec::new(),
            TemporalMode::AsOf { instant } => vec![instant],
            TemporalMode::FromTo { start, end }
            | TemporalMode::Between { start, end }
            | TemporalMode::ContainedIn { start, end } => vec![start, end],
        }
    }

    /// Range modes require `start <= end`; equal bounds are accepted.
    pub fn validate(&self) -> Result<(), TemporalQueryError> {
        match self.range() {
            Some((start, end)) if start > end => Err(TemporalQueryError::InvalidRange {
                mode: self.name(),
                start,
                end,
            }),
            _ => Ok(()),
        }
    }
}

/// Interpret a zone-less timestamp in `tz` and convert it to UTC.
///
/// Local times that a DST transition repeats or skips are read with the
/// zone's standard offset, the smaller of the two offsets around the
/// transition. A repeated 01:30 in New York is 01:30 EST, and a skipped
/// 02:30 is also read as EST.
pub fn naive_to_utc<Tz: TimeZone>(
    local: NaiveDateTime,
    tz: &Tz,
) -> Result<DateTime<Utc>, TemporalQueryError> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(instant) => Ok(instant.with_timezone(&Utc)),
        LocalResult::Ambiguous(first, second) => {
            let standard = if first.offset().fix().local_minus_utc()
                <= second.offset().fix().local_minus_utc()
            {
                first
            } else {
                second
            };
            Ok(standard.with_timezone(&Utc))
        }
        LocalResult::None => standard_offset_around(local, tz)
            .map(|offset| (local - offset).and_utc())
            .ok_or(TemporalQueryError::NonexistentLocalTime { local }),
    }
}

/// Smaller of the offsets in effect a day before and a day after `local`
fn standard_offset_around<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> Option<FixedOffset> {
    [
        local.checked_sub_signed(TimeDelta::days(1)),
        local.checked_add_signed(TimeDelta::days(1)),
    ]
    .into_iter()
    .flatten()
    .filter_map(|t| tz.offset_from_local_datetime(&t).earliest())
    .map(|offset| offset.fix())
    .min_by_key(|offset| offset.local_minus_utc())
}
