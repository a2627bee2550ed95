//! Classification of Diesel failures raised by the SQLite repositories.
//!
//! Raw driver messages are logged at `debug` and never copied into port
//! errors; callers get one of the fixed messages below.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

pub(super) const CONNECTION_LOST: &str = "database connection error";
pub(super) const QUERY_FAILED: &str = "database error";

/// How a repository should report a failed statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Failure {
    /// The connection went away mid-statement.
    Connection,
    /// A `UNIQUE` index rejected the row.
    UniqueViolation,
    Query,
}

/// Log `error` and decide how it surfaces through a port.
pub(super) fn classify(error: &DieselError) -> Failure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "sqlite rejected statement"
            );
            match kind {
                DatabaseErrorKind::ClosedConnection => Failure::Connection,
                DatabaseErrorKind::UniqueViolation => Failure::UniqueViolation,
                _ => Failure::Query,
            }
        }
        other => {
            debug!(error = %other, "diesel operation failed");
            Failure::Query
        }
    }
}
