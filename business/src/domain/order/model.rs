use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::cart::model::CartSummary;
use crate::domain::shared::value_objects::{ItemId, Price};

use super::errors::OrderError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub subtotal: Price,
}

/// Snapshot of the cart handed to the order backend.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDraft {
    pub id: Uuid,
    pub lines: Vec<OrderLine>,
    pub total: Price,
    pub created_at: DateTime<Utc>,
}

impl OrderDraft {
    pub fn from_summary(summary: CartSummary) -> Result<Self, OrderError> {
        if summary.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let lines = summary
            .lines
            .into_iter()
            .map(|line| OrderLine {
                item_id: line.item.id,
                name: line.item.name,
                unit_price: line.item.price,
                quantity: line.quantity,
                subtotal: line.subtotal,
            })
            .collect();

        Ok(Self {
            id: Uuid::new_v4(),
            lines,
            total: summary.total,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub total: Price,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLine;
    use crate::domain::catalog::model::CatalogItem;

    #[test]
    fn should_reject_draft_from_empty_summary() {
        let summary = CartSummary {
            lines: vec![],
            total: Price::ZERO,
        };

        let result = OrderDraft::from_summary(summary);

        assert!(matches!(result.unwrap_err(), OrderError::EmptyCart));
    }

    #[test]
    fn should_copy_lines_and_total_into_draft() {
        let item =
            CatalogItem::new(ItemId::new(3), "Кола".to_string(), Price::new(8000)).unwrap();
        let summary = CartSummary {
            lines: vec![CartLine {
                item,
                quantity: 3,
                subtotal: Price::new(24000),
            }],
            total: Price::new(24000),
        };

        let draft = OrderDraft::from_summary(summary).unwrap();

        assert_eq!(draft.lines.len(), 1);
        assert_eq!(draft.lines[0].name, "Кола");
        assert_eq!(draft.lines[0].unit_price, Price::new(8000));
        assert_eq!(draft.lines[0].quantity, 3);
        assert_eq!(draft.total, Price::new(24000));
    }
}
