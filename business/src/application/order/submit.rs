use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::session::CartSession;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::{OrderDraft, OrderReceipt};
use crate::domain::order::services::OrderSubmitter;
use crate::domain::order::use_cases::submit::SubmitOrderUseCase;

pub struct SubmitOrderUseCaseImpl {
    pub session: Arc<CartSession>,
    pub submitter: Arc<dyn OrderSubmitter>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitOrderUseCase for SubmitOrderUseCaseImpl {
    async fn execute(&self) -> Result<OrderReceipt, OrderError> {
        // Snapshot first; the cart lock is never held across the backend call.
        let summary = self.session.with_store(|store| store.summary());

        let draft = match OrderDraft::from_summary(summary) {
            Ok(draft) => draft,
            Err(err) => {
                self.logger.warn("Order submission refused: cart is empty");
                return Err(err);
            }
        };

        self.logger.info(&format!(
            "Submitting order {} with {} lines, total {}",
            draft.id,
            draft.lines.len(),
            draft.total
        ));

        match self.submitter.submit(&draft).await {
            Ok(receipt) => {
                self.logger
                    .info(&format!("Order {} accepted", receipt.order_id));
                Ok(receipt)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Order {} failed: {:?}", draft.id, err));
                Err(err)
            }
        }
    }
}
