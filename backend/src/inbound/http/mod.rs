//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod extractors;
pub mod health;
pub mod schemas;
pub mod state;
pub mod submissions;
pub mod users;

pub use error::ApiResult;

/// Register the API routes and their extractor configuration.
///
/// Handlers expect a `web::Data<state::HttpState>` registered on the app.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use xp_tracker::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extractors::json_config())
        .app_data(extractors::path_config())
        .app_data(extractors::query_config())
        .service(users::create_user)
        .service(users::get_user_by_slack_id)
        .service(users::get_user)
        .service(users::update_user)
        .service(submissions::count_submissions);
}
