//! Maps crate errors onto HTTP responses.
//!
//! Every failure becomes a JSON body `{"error": <stable code>, "message":
//! <human text>}` with a matching status. Insufficient balance is a dedicated
//! 409 code - clients switch on `error`, never on message substrings.

use crate::errors::Error;
use axum::{
    Json,
    http::{StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Error::Validation { .. } | Error::InvalidAmount { .. } => {
                (StatusCode::BAD_REQUEST, "invalid_request")
            }
            Error::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
            Error::SelfGift => (StatusCode::FORBIDDEN, "self_gift"),
            Error::Forbidden { .. } => (StatusCode::FORBIDDEN, "forbidden"),
            Error::IdeaNotFound { .. } | Error::ItemNotFound { .. } | Error::UserNotFound { .. } => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            Error::InsufficientBalance { .. } => (StatusCode::CONFLICT, "insufficient_rose_balance"),
            Error::InsufficientStock { .. } => (StatusCode::CONFLICT, "insufficient_stock"),
            Error::Database(_) | Error::Io(_) | Error::Config { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        // Internal details stay in the logs
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Internal error serving request: {self}");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({ "error": code, "message": message }));

        if status == StatusCode::UNAUTHORIZED {
            (status, [(WWW_AUTHENTICATE, "Basic realm=\"student-portal\"")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                Error::Validation {
                    message: "bad".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (Error::Unauthorized, StatusCode::UNAUTHORIZED),
            (Error::SelfGift, StatusCode::FORBIDDEN),
            (Error::IdeaNotFound { id: 1 }, StatusCode::NOT_FOUND),
            (
                Error::InsufficientBalance {
                    balance: 0,
                    required: 10,
                },
                StatusCode::CONFLICT,
            ),
            (
                Error::InsufficientStock {
                    available: 2,
                    requested: 3,
                },
                StatusCode::CONFLICT,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
