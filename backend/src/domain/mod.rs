//! Domain primitives, ports and use-case services.
//!
//! Purpose: define the user entity and the operations on it without any
//! knowledge of HTTP or SQL. Adapters in `inbound` and `outbound` depend on
//! this module, never the other way round.
//!
//! Public surface:
//! - `User`, `UserId`, `SlackId`, `NewUser`, `CreateUserRequest`, `UserPatch`.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.
//! - `UserService`, `SubmissionService`: implementations of the driving ports.

pub mod error;
pub mod ports;
pub mod submission_service;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::submission_service::SubmissionService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{CreateUserRequest, NewUser, SlackId, User, UserId, UserPatch};
pub use self::user_service::UserService;
