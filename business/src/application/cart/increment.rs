use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::session::CartSession;
use crate::domain::cart::use_cases::increment::{IncrementItemParams, IncrementItemUseCase};
use crate::domain::logger::Logger;

pub struct IncrementItemUseCaseImpl {
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl IncrementItemUseCase for IncrementItemUseCaseImpl {
    fn execute(&self, params: IncrementItemParams) -> Result<CartSummary, CartError> {
        let item_id = params.item_id;

        let result = self.session.with_store(|store| {
            let quantity = store.increment(item_id)?;
            Ok((quantity, store.summary()))
        });

        match result {
            Ok((quantity, summary)) => {
                self.logger.info(&format!(
                    "Item {} incremented to {}, total {}",
                    item_id, quantity, summary.total
                ));
                Ok(summary)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Rejected increment of unknown item {}", item_id));
                Err(err)
            }
        }
    }
}
