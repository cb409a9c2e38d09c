use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::order::use_cases::submit::SubmitOrderUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::OrderReceiptResponse;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    submit_use_case: Arc<dyn SubmitOrderUseCase>,
}

impl OrderApi {
    pub fn new(submit_use_case: Arc<dyn SubmitOrderUseCase>) -> Self {
        Self { submit_use_case }
    }
}

/// Order API
#[OpenApi]
impl OrderApi {
    /// Place the order
    ///
    /// Sends a snapshot of the current cart to the order backend. The cart
    /// itself is left as it is.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn submit_order(&self) -> SubmitOrderResponse {
        match self.submit_use_case.execute().await {
            Ok(receipt) => SubmitOrderResponse::Created(Json(receipt.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitOrderResponse::BadRequest(json),
                    _ => SubmitOrderResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderReceiptResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
