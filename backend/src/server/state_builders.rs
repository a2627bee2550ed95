//! Wiring from the connection pool to the HTTP handler state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use xp_tracker::domain::{SubmissionService, UserService};
use xp_tracker::inbound::http::state::HttpState;
use xp_tracker::outbound::persistence::{
    DbPool, DieselSubmissionRepository, DieselUserRepository,
};

/// Build handler state backed by the SQLite repositories.
///
/// One `UserService` serves both the command and query ports.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let users = Arc::new(UserService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    ));
    let submissions = Arc::new(SubmissionService::new(Arc::new(
        DieselSubmissionRepository::new(pool.clone()),
    )));

    web::Data::new(HttpState::new(users.clone(), users, submissions))
}
