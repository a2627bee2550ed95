//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{SubmissionsQuery, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub submissions: Arc<dyn SubmissionsQuery>,
}

impl HttpState {
    /// Bundle the port implementations used by the handlers.
    pub fn new(
        users: Arc<dyn UsersCommand>,
        users_query: Arc<dyn UsersQuery>,
        submissions: Arc<dyn SubmissionsQuery>,
    ) -> Self {
        Self {
            users,
            users_query,
            submissions,
        }
    }
}
