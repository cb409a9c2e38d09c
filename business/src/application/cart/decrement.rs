use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::session::CartSession;
use crate::domain::cart::use_cases::decrement::{DecrementItemParams, DecrementItemUseCase};
use crate::domain::logger::Logger;

pub struct DecrementItemUseCaseImpl {
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl DecrementItemUseCase for DecrementItemUseCaseImpl {
    fn execute(&self, params: DecrementItemParams) -> Result<CartSummary, CartError> {
        let item_id = params.item_id;

        let result = self.session.with_store(|store| {
            let remaining = store.decrement(item_id)?;
            Ok((remaining, store.summary()))
        });

        match result {
            Ok((Some(quantity), summary)) => {
                self.logger.info(&format!(
                    "Item {} decremented to {}, total {}",
                    item_id, quantity, summary.total
                ));
                Ok(summary)
            }
            Ok((None, summary)) => {
                self.logger.info(&format!(
                    "Item {} no longer in cart, total {}",
                    item_id, summary.total
                ));
                Ok(summary)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Rejected decrement of unknown item {}", item_id));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{Catalog, CatalogItem};
    use crate::domain::shared::value_objects::{ItemId, Price};
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn test_session() -> Arc<CartSession> {
        let items = vec![
            CatalogItem::new(ItemId::new(1), "Гамбургер".to_string(), Price::new(20000)).unwrap(),
            CatalogItem::new(ItemId::new(2), "Хот-дог".to_string(), Price::new(15000)).unwrap(),
        ];
        Arc::new(CartSession::new(Arc::new(Catalog::new(items).unwrap())))
    }

    #[test]
    fn should_decrease_quantity_and_return_summary() {
        let session = test_session();
        session.with_store(|store| {
            store.increment(ItemId::new(2)).unwrap();
            store.increment(ItemId::new(2)).unwrap();
        });

        let use_case = DecrementItemUseCaseImpl {
            session,
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(DecrementItemParams {
                item_id: ItemId::new(2),
            })
            .unwrap();

        assert_eq!(summary.lines[0].quantity, 1);
        assert_eq!(summary.total, Price::new(15000));
    }

    #[test]
    fn should_drop_line_when_last_unit_removed() {
        let session = test_session();
        session.with_store(|store| store.increment(ItemId::new(1))).unwrap();

        let use_case = DecrementItemUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(DecrementItemParams {
                item_id: ItemId::new(1),
            })
            .unwrap();

        assert!(summary.is_empty());
        assert_eq!(summary.total, Price::ZERO);
        assert_eq!(session.with_store(|store| store.quantity(ItemId::new(1))), None);
    }

    #[test]
    fn should_succeed_without_change_when_item_not_in_cart() {
        let session = test_session();

        let use_case = DecrementItemUseCaseImpl {
            session: session.clone(),
            logger: mock_logger(),
        };

        let result = use_case.execute(DecrementItemParams {
            item_id: ItemId::new(2),
        });

        assert!(result.is_ok());
        assert!(session.with_store(|store| store.state().is_empty()));
    }

    #[test]
    fn should_return_invalid_item_when_id_unknown() {
        let use_case = DecrementItemUseCaseImpl {
            session: test_session(),
            logger: mock_logger(),
        };

        let result = use_case.execute(DecrementItemParams {
            item_id: ItemId::new(99),
        });

        assert_eq!(result.unwrap_err(), CartError::InvalidItem(ItemId::new(99)));
    }
}
