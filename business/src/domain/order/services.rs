use async_trait::async_trait;

use super::errors::OrderError;
use super::model::{OrderDraft, OrderReceipt};

/// Service port for the order backend that receives placed orders.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit(&self, draft: &OrderDraft) -> Result<OrderReceipt, OrderError>;
}
