//! Client-error responses for rejected submissions.
//!
//! Both field-level validation failures and unreadable bodies are answered
//! with `422 Unprocessable Entity` and a `detail` list:
//!
//! ```json
//! {"detail": [{"loc": ["body", "email"], "msg": "...", "type": "value_error"}]}
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::intake::ValidationError;

/// Errors a handler can return to the client.
#[derive(Debug)]
pub enum ApiError {
    /// One or more fields failed validation.
    Validation(ValidationError),
    /// Body was not JSON, missed a field, or had a wrong type.
    MalformedBody(String),
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

/// One entry of the `detail` list.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: Vec<ErrorDetail>,
}

impl ApiError {
    fn details(&self) -> Vec<ErrorDetail> {
        match self {
            ApiError::Validation(e) => e
                .errors
                .iter()
                .map(|field| ErrorDetail {
                    loc: vec!["body".to_string(), field.field.to_string()],
                    msg: field.message.to_string(),
                    kind: "value_error",
                })
                .collect(),
            ApiError::MalformedBody(msg) => vec![ErrorDetail {
                loc: vec!["body".to_string()],
                msg: msg.clone(),
                kind: "json_invalid",
            }],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.details(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::FieldError;

    #[test]
    fn test_validation_details() {
        let err = ApiError::from(ValidationError {
            errors: vec![
                FieldError {
                    field: "ownerName",
                    message: "Field is too short.",
                },
                FieldError {
                    field: "phone",
                    message: "Enter a valid phone number.",
                },
            ],
        });

        let value = serde_json::to_value(ErrorResponse {
            detail: err.details(),
        })
        .unwrap();

        assert_eq!(value["detail"][0]["loc"], serde_json::json!(["body", "ownerName"]));
        assert_eq!(value["detail"][0]["type"], "value_error");
        assert_eq!(value["detail"][1]["msg"], "Enter a valid phone number.");
    }

    #[test]
    fn test_malformed_body_status() {
        let response = ApiError::MalformedBody("EOF while parsing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
