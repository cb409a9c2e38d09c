use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::OrderReceipt;

#[async_trait]
pub trait SubmitOrderUseCase: Send + Sync {
    async fn execute(&self) -> Result<OrderReceipt, OrderError>;
}
