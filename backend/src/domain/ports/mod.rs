//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`UserRepository`, `SubmissionRepository`) are implemented by
//! outbound persistence adapters. Driving ports (`UsersCommand`,
//! `UsersQuery`, `SubmissionsQuery`) are implemented by domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod submission_repository;
mod submissions_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
pub use submission_repository::{SubmissionPersistenceError, SubmissionRepository};
#[cfg(test)]
pub use submissions_query::MockSubmissionsQuery;
pub use submissions_query::SubmissionsQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
