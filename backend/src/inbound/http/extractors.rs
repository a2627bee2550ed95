//! Extractor configuration turning malformed input into domain errors.
//!
//! Actix rejects undecodable bodies, paths and query strings before a handler
//! runs. These configs map those rejections to `validation_failed` (422) with
//! the same JSON envelope as every other error.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

fn rejection(source: &'static str, req: &HttpRequest, reason: String) -> actix_web::Error {
    debug!(source, path = req.path(), %reason, "request rejected during extraction");
    Error::validation_failed(format!("invalid request {source}"))
        .with_details(json!({ "source": source, "reason": reason }))
        .into()
}

/// JSON body configuration.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, req| rejection("body", req, err.to_string()))
}

/// Path parameter configuration.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err: PathError, req| rejection("path", req, err.to_string()))
}

/// Query string configuration.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err: QueryPayloadError, req| rejection("query", req, err.to_string()))
}

/// Deserialize a field that is present in the payload.
///
/// Combined with `#[serde(default)]`, an absent field stays `None` while a
/// present one becomes `Some`. For `Option<Option<T>>` fields an explicit
/// `null` is `Some(None)`; for `Option<T>` with a non-nullable `T` it is a
/// type error.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use actix_web::{App, HttpResponse, http::StatusCode, test as actix_test};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "present")]
        count: Option<i64>,
        #[serde(default, deserialize_with = "present")]
        label: Option<Option<String>>,
    }

    #[test]
    fn absent_fields_stay_none() {
        let payload: Payload = serde_json::from_str("{}").expect("empty object");
        assert_eq!(payload.count, None);
        assert_eq!(payload.label, None);
    }

    #[test]
    fn null_label_is_present_but_empty() {
        let payload: Payload = serde_json::from_str(r#"{"label": null}"#).expect("null label");
        assert_eq!(payload.label, Some(None));
    }

    #[test]
    fn null_count_is_rejected() {
        assert!(serde_json::from_str::<Payload>(r#"{"count": null}"#).is_err());
    }

    #[actix_web::test]
    async fn malformed_path_maps_to_unprocessable_entity() {
        let app = actix_test::init_service(App::new().app_data(path_config()).route(
            "/items/{id}",
            web::get().to(|id: web::Path<i64>| async move {
                HttpResponse::Ok().body(id.into_inner().to_string())
            }),
        ))
        .await;

        let req = actix_test::TestRequest::get().uri("/items/abc").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Error = actix_test::read_body_json(res).await;
        assert_eq!(body.code(), ErrorCode::ValidationFailed);
        assert_eq!(
            body.details().and_then(|d| d.get("source")),
            Some(&json!("path"))
        );
    }
}
