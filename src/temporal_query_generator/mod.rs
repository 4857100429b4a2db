mod common;
mod errors;
mod statement;
mod table_name_resolver;
mod temporal_clause;
mod temporal_mode;

pub use common::{qualified_table, quote_identifier, IdentifierQuoting, PlaceholderStyle};
pub use errors::TemporalQueryError;
pub use statement::{ParameterValue, TemporalStatement};
pub use table_name_resolver::{QualifiedName, TableNameResolver};
pub use temporal_clause::{build_temporal_statement, TemporalClauseBuilder};
pub use temporal_mode::{naive_to_utc, TemporalMode};
