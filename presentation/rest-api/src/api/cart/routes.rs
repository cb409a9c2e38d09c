use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::decrement::{DecrementItemParams, DecrementItemUseCase};
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::increment::{IncrementItemParams, IncrementItemUseCase};
use business::domain::shared::value_objects::ItemId;

use crate::api::cart::dto::{CartResponse, CartSummaryResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    increment_use_case: Arc<dyn IncrementItemUseCase>,
    decrement_use_case: Arc<dyn DecrementItemUseCase>,
}

impl CartApi {
    pub fn new(
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        increment_use_case: Arc<dyn IncrementItemUseCase>,
        decrement_use_case: Arc<dyn DecrementItemUseCase>,
    ) -> Self {
        Self {
            get_cart_use_case,
            increment_use_case,
            decrement_use_case,
        }
    }
}

fn parse_item_id(raw: &str) -> Result<ItemId, Json<ErrorResponse>> {
    raw.parse::<ItemId>()
        .map_err(|_| ErrorResponse::json("ValidationError", "cart.invalid_item_id"))
}

/// Cart API
///
/// The +/- controls and the summary panel of the ordering screen.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns every menu item with its counter, the present lines and the total.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> Json<CartResponse> {
        Json(self.get_cart_use_case.execute().into())
    }

    /// Add one unit of an item
    #[oai(path = "/cart/items/:id/increment", method = "post", tag = "ApiTags::Cart")]
    async fn increment(&self, id: Path<String>) -> CartMutationResponse {
        let item_id = match parse_item_id(&id.0) {
            Ok(item_id) => item_id,
            Err(json) => return CartMutationResponse::BadRequest(json),
        };

        match self
            .increment_use_case
            .execute(IncrementItemParams { item_id })
        {
            Ok(summary) => CartMutationResponse::Ok(Json(summary.into())),
            Err(err) => CartMutationResponse::from_error(err),
        }
    }

    /// Remove one unit of an item
    ///
    /// The line disappears once its quantity reaches zero. Removing an item
    /// that is not in the cart leaves the cart unchanged.
    #[oai(path = "/cart/items/:id/decrement", method = "post", tag = "ApiTags::Cart")]
    async fn decrement(&self, id: Path<String>) -> CartMutationResponse {
        let item_id = match parse_item_id(&id.0) {
            Ok(item_id) => item_id,
            Err(json) => return CartMutationResponse::BadRequest(json),
        };

        match self
            .decrement_use_case
            .execute(DecrementItemParams { item_id })
        {
            Ok(summary) => CartMutationResponse::Ok(Json(summary.into())),
            Err(err) => CartMutationResponse::from_error(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartSummaryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

impl CartMutationResponse {
    fn from_error(err: impl IntoErrorResponse) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            404 => CartMutationResponse::NotFound(json),
            _ => CartMutationResponse::BadRequest(json),
        }
    }
}
