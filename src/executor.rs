//! Execution boundary.
//!
//! The crate never talks to a database. Whatever owns the connection
//! implements [`TemporalExecutor`]: it binds the statement's parameters
//! positionally, runs it, and materializes rows. Its failures are passed
//! back untouched.

use async_trait::async_trait;
use thiserror::Error;

use crate::temporal_query_generator::{TemporalQueryError, TemporalStatement};

#[async_trait]
pub trait TemporalExecutor: Send + Sync {
    type Row: Send;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Bind `statement.parameters()` to its placeholders in order and run it.
    /// Implementations must never splice parameter values into the SQL text.
    async fn execute(&self, statement: TemporalStatement) -> Result<Vec<Self::Row>, Self::Error>;
}

#[derive(Debug, Error)]
pub enum FetchError<E> {
    /// The statement could not be built; nothing was sent to the executor
    #[error(transparent)]
    Build(#[from] TemporalQueryError),
    #[error("Temporal statement execution failed: {0}")]
    Execute(#[source] E),
}

impl<E> FetchError<E> {
    pub fn as_build_error(&self) -> Option<&TemporalQueryError> {
        match self {
            FetchError::Build(err) => Some(err),
            FetchError::Execute(_) => None,
        }
    }
}
