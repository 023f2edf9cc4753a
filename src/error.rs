// src/error.rs
use axum::{extract::rejection::JsonRejection, response::{IntoResponse, Response}, Json};
use http::StatusCode;
use serde_json::json;

use crate::services::product::ProductError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Conflict(String),
    ValidationError(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::NotFound(msg) | AppError::Conflict(msg) | AppError::ValidationError(msg) => msg,
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Conflict { .. } => AppError::conflict(err.to_string()),
            ProductError::NotFound { .. } => AppError::not_found(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_errors_map_to_transport_status() {
        let conflict = AppError::from(ProductError::Conflict { sku: 1 });
        let missing = AppError::from(ProductError::NotFound { operation: "get_product", sku: 2 });

        assert_eq!(conflict.status(), StatusCode::CONFLICT);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert!(matches!(missing, AppError::NotFound(msg) if msg.contains("sku=2")));
    }

    #[test]
    fn validation_error_is_bad_request() {
        let response = AppError::validation("missing field `name`").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
