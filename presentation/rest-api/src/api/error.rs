use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error category, e.g. "ValidationError"
    pub name: String,
    /// Code-style identifier, e.g. "cart.invalid_item"
    pub message: String,
}

impl ErrorResponse {
    pub fn json(name: &str, message: &str) -> Json<ErrorResponse> {
        Json(ErrorResponse {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
