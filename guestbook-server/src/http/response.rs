//! JSON response writer
//!
//! Bodies are UTF-8 JSON with non-ASCII characters left as-is, tagged
//! `application/json; charset=utf-8`.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

const SERIALIZE_FAILED: &[u8] = br#"{"error":"Internal Server Error"}"#;

/// A serialized JSON body with its status code
#[derive(Debug, Clone)]
pub struct JsonResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl JsonResponse {
    /// Serialize `payload` for sending with `status`.
    ///
    /// A payload that fails to serialize becomes a 500.
    pub fn new<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Self {
        match serde_json::to_vec(payload) {
            Ok(body) => Self { status, body },
            Err(e) => {
                tracing::error!("Failed to serialize response: {}", e);
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: SERIALIZE_FAILED.to_vec(),
                }
            }
        }
    }

    /// 200 OK
    pub fn ok<T: Serialize + ?Sized>(payload: &T) -> Self {
        Self::new(StatusCode::OK, payload)
    }

    /// 201 Created
    pub fn created<T: Serialize + ?Sized>(payload: &T) -> Self {
        Self::new(StatusCode::CREATED, payload)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_ascii_is_not_escaped() {
        let response = JsonResponse::ok(&json!({"country": "Россия"}));
        let text = std::str::from_utf8(response.body()).unwrap();
        assert!(text.contains("Россия"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn sets_utf8_content_type() {
        let response = JsonResponse::created(&json!({"id": 1})).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_UTF8
        );
    }
}
