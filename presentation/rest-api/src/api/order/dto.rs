use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::OrderReceipt;

#[derive(Debug, Clone, Object)]
pub struct OrderReceiptResponse {
    /// Order identifier
    pub order_id: String,
    /// Ordered total in minor currency units
    pub total: u64,
    /// Total as displayed
    pub total_label: String,
    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
}

impl From<OrderReceipt> for OrderReceiptResponse {
    fn from(receipt: OrderReceipt) -> Self {
        Self {
            order_id: receipt.order_id.to_string(),
            total: receipt.total.amount(),
            total_label: receipt.total.to_string(),
            submitted_at: receipt.submitted_at,
        }
    }
}
