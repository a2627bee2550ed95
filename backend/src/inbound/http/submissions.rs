//! Submission statistics handlers.
//!
//! ```text
//! GET /submissions/count?author_id=1
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::UserId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Query string for `GET /submissions/count`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CountQuery {
    /// Internal identifier of the author; unknown authors count zero.
    pub author_id: i64,
}

/// Submission count payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CountResponse {
    #[schema(example = 3)]
    pub count: u64,
}

/// Count the submissions recorded for an author.
#[utoipa::path(
    get,
    path = "/submissions/count",
    params(CountQuery),
    responses(
        (status = 200, description = "Submission count", body = CountResponse),
        (status = 422, description = "Missing or non-integer author_id", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["submissions"],
    operation_id = "countSubmissions"
)]
#[get("/submissions/count")]
pub async fn count_submissions(
    state: web::Data<HttpState>,
    query: web::Query<CountQuery>,
) -> ApiResult<web::Json<CountResponse>> {
    let count = state
        .submissions
        .count_for_author(UserId::new(query.author_id))
        .await?;
    Ok(web::Json(CountResponse { count }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{MockSubmissionsQuery, MockUsersCommand, MockUsersQuery};
    use crate::domain::{Error, ErrorCode};
    use crate::inbound::http::configure;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use mockall::predicate::eq;
    use rstest::rstest;

    fn state_with(submissions: MockSubmissionsQuery) -> HttpState {
        HttpState::new(
            Arc::new(MockUsersCommand::new()),
            Arc::new(MockUsersQuery::new()),
            Arc::new(submissions),
        )
    }

    #[actix_web::test]
    async fn returns_count_for_author() {
        let mut submissions = MockSubmissionsQuery::new();
        submissions
            .expect_count_for_author()
            .with(eq(UserId::new(4)))
            .times(1)
            .returning(|_| Ok(2));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(submissions)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/submissions/count?author_id=4")
            .to_request();
        let body: CountResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, CountResponse { count: 2 });
    }

    #[rstest]
    #[case("/submissions/count")]
    #[case("/submissions/count?author_id=abc")]
    #[actix_web::test]
    async fn rejects_missing_or_malformed_author(#[case] uri: &str) {
        let mut submissions = MockSubmissionsQuery::new();
        submissions.expect_count_for_author().never();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(submissions)))
                .configure(configure),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Error = test::read_body_json(res).await;
        assert_eq!(body.code(), ErrorCode::ValidationFailed);
    }
}
