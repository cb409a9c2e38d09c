use poem_openapi::Object;

use business::domain::cart::model::{CartLine, CartSummary, CartView, MenuLine};

#[derive(Debug, Clone, Object)]
pub struct MenuLineResponse {
    /// Catalog item identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Unit price in minor currency units
    pub price: u64,
    /// Unit price as displayed
    pub price_label: String,
    /// Units in the cart, 0 when the item was not added
    pub quantity: u32,
}

impl From<MenuLine> for MenuLineResponse {
    fn from(line: MenuLine) -> Self {
        Self {
            id: line.item.id.value(),
            price: line.item.price.amount(),
            price_label: line.item.price.to_string(),
            name: line.item.name,
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    /// Unit price times quantity
    pub subtotal: u64,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.item.id.value(),
            name: line.item.name,
            quantity: line.quantity,
            subtotal: line.subtotal.amount(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartSummaryResponse {
    /// Items present in the cart
    pub lines: Vec<CartLineResponse>,
    /// Sum of all subtotals in minor currency units
    pub total: u64,
    /// Summary caption, e.g. "Итого: 40000 сум"
    pub total_label: String,
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            total: summary.total.amount(),
            total_label: summary.total_label(),
            lines: summary.lines.into_iter().map(|l| l.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Every menu item with its counter
    pub menu: Vec<MenuLineResponse>,
    pub summary: CartSummaryResponse,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        Self {
            menu: view.menu.into_iter().map(|l| l.into()).collect(),
            summary: view.summary.into(),
        }
    }
}
