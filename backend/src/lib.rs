//! XP tracker backend library.
//!
//! Stores chat-platform users with experience-point and streak counters in a
//! local SQLite file and counts the submissions recorded against them. The
//! crate follows a ports-and-adapters layout: [`domain`] owns the entities,
//! errors and use-case services, [`inbound`] exposes them over HTTP, and
//! [`outbound`] persists them.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(test)]
pub(crate) mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
