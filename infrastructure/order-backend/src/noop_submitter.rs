use async_trait::async_trait;
use chrono::Utc;

use business::domain::order::errors::OrderError;
use business::domain::order::model::{OrderDraft, OrderReceipt};
use business::domain::order::services::OrderSubmitter;

/// Acknowledges every order without sending it anywhere.
///
/// Used when no order backend is configured.
pub struct NoopOrderSubmitter;

#[async_trait]
impl OrderSubmitter for NoopOrderSubmitter {
    async fn submit(&self, draft: &OrderDraft) -> Result<OrderReceipt, OrderError> {
        tracing::debug!(order_id = %draft.id, "no order backend configured, order not forwarded");

        Ok(OrderReceipt {
            order_id: draft.id,
            total: draft.total,
            submitted_at: Utc::now(),
        })
    }
}
