//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by a single
//! SQLite file, accessed through `diesel-async`'s sync connection wrapper and
//! `bb8` pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database failures are mapped to the port
//!   error enums.
//!
//! # Example
//!
//! ```no_run
//! use xp_tracker::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, ensure_schema,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("./local.db")).await?;
//! ensure_schema(&pool).await?;
//! let repo = DieselUserRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod bootstrap;
mod diesel_submission_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;
mod sqlite_error_mapping;

pub use bootstrap::{SchemaError, ensure_schema};
pub use diesel_submission_repository::DieselSubmissionRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError, SqliteConn};
