use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::EmptyCart => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.empty_cart",
            ),
            OrderError::Rejected(_) => (StatusCode::BAD_GATEWAY, "OrderRejected", "order.rejected"),
            OrderError::BackendUnavailable(_) => (
                StatusCode::BAD_GATEWAY,
                "BackendUnavailable",
                "order.backend_unavailable",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}
