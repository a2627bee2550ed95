//! Users API handlers.
//!
//! ```text
//! POST /users {"slack_id":"U123","display_name":"Ada"}
//! GET /users/slack/U123
//! GET /users/1
//! PUT /users/1 {"total_xp":50}
//! ```

use actix_web::{get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CreateUserRequest, SlackId, User, UserId, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::extractors::present;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserBody {
    /// Chat platform identifier; must be unique.
    #[schema(example = "U024BE7LH")]
    pub slack_id: String,
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub display_name: Option<String>,
}

impl From<CreateUserBody> for CreateUserRequest {
    fn from(value: CreateUserBody) -> Self {
        Self {
            slack_id: SlackId::new(value.slack_id),
            display_name: value.display_name,
        }
    }
}

/// Request body for `PUT /users/{user_id}`.
///
/// Only fields present in the JSON are applied, including explicit `null`,
/// which clears the stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserBody {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub total_xp: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub current_streak: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub longest_streak: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub display_name: Option<Option<String>>,
}

impl From<UpdateUserBody> for UserPatch {
    fn from(value: UpdateUserBody) -> Self {
        Self {
            total_xp: value.total_xp,
            current_streak: value.current_streak,
            longest_streak: value.longest_streak,
            display_name: value.display_name,
        }
    }
}

/// Public view of a stored user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserBody {
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "U024BE7LH")]
    pub slack_id: String,
    pub display_name: Option<String>,
    #[schema(example = 0)]
    pub total_xp: Option<i64>,
    pub current_streak: Option<i64>,
    pub longest_streak: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id.get(),
            slack_id: user.slack_id.into(),
            display_name: user.display_name,
            total_xp: user.total_xp,
            current_streak: user.current_streak,
            longest_streak: user.longest_streak,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response envelope wrapping a single user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    pub user: UserBody,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self { user: user.into() }
    }
}

/// Register a new user with zeroed counters.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserBody,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 409, description = "Slack id already registered", body = ErrorSchema),
        (status = 422, description = "Malformed body", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.create_user(payload.into_inner().into()).await?;
    Ok(web::Json(user.into()))
}

/// Fetch a user by their chat platform identifier.
#[utoipa::path(
    get,
    path = "/users/slack/{slack_id}",
    params(("slack_id" = String, Path, description = "Chat platform identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserBySlackId"
)]
#[get("/users/slack/{slack_id}")]
pub async fn get_user_by_slack_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let slack_id = SlackId::new(path.into_inner());
    let user = state.users_query.user_by_slack_id(&slack_id).await?;
    Ok(web::Json(user.into()))
}

/// Fetch a user by internal identifier.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "Internal user identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 422, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users_query
        .user_by_id(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(user.into()))
}

/// Partially update a user's counters or display name.
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "Internal user identifier")),
    request_body = UpdateUserBody,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 422, description = "Malformed path or body", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{user_id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateUserBody>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users
        .update_user(UserId::new(path.into_inner()), payload.into_inner().into())
        .await?;
    Ok(web::Json(user.into()))
}
