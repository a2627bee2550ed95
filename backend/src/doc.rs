//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint (users, submissions, health) and
//! the error schema wrappers from [`crate::inbound::http::schemas`]. The
//! document backs Swagger UI in debug builds and is exported by
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::submissions::CountResponse;
use crate::inbound::http::users::{CreateUserBody, UpdateUserBody, UserBody, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "XP tracker API",
        description = "Users with XP and streak counters, and per-author submission counts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user_by_slack_id,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::submissions::count_submissions,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserBody,
        UpdateUserBody,
        UserBody,
        UserResponse,
        CountResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "Create, fetch and update users"),
        (name = "submissions", description = "Submission statistics"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
