use std::sync::Arc;

use crate::domain::catalog::model::Catalog;
use crate::domain::shared::value_objects::{ItemId, Price};

use super::errors::CartError;
use super::model::{CartLine, CartState, CartSummary, CartView, MenuLine};

/// Owns the cart of one session and derives its totals from the catalog.
///
/// Every key in the state is a catalog id: mutations check the id first and
/// fail with [`CartError::InvalidItem`] without touching the state.
#[derive(Debug, Clone)]
pub struct CartStore {
    catalog: Arc<Catalog>,
    state: CartState,
}

impl CartStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: CartState::new(),
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Adds one unit of `id` and returns the new quantity.
    pub fn increment(&mut self, id: ItemId) -> Result<u32, CartError> {
        self.ensure_known(id)?;
        Ok(self.state.add_one(id))
    }

    /// Removes one unit of `id` and returns what is left, `None` once the
    /// entry is gone. Decrementing an item that is not in the cart is a no-op.
    pub fn decrement(&mut self, id: ItemId) -> Result<Option<u32>, CartError> {
        self.ensure_known(id)?;
        Ok(self.state.remove_one(id))
    }

    pub fn quantity(&self, id: ItemId) -> Option<u32> {
        self.state.quantity(id)
    }

    pub fn total(&self) -> Price {
        self.state
            .entries()
            .filter_map(|(id, qty)| self.catalog.get(id).map(|item| item.price.times(qty)))
            .sum()
    }

    /// Present entries in menu order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.catalog
            .items()
            .iter()
            .filter_map(|item| {
                self.state.quantity(item.id).map(|quantity| CartLine {
                    item: item.clone(),
                    quantity,
                    subtotal: item.price.times(quantity),
                })
            })
            .collect()
    }

    /// Every catalog item with its counter, 0 when not in the cart.
    pub fn menu(&self) -> Vec<MenuLine> {
        self.catalog
            .items()
            .iter()
            .map(|item| MenuLine {
                item: item.clone(),
                quantity: self.state.quantity(item.id).unwrap_or(0),
            })
            .collect()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines(),
            total: self.total(),
        }
    }

    pub fn view(&self) -> CartView {
        CartView {
            menu: self.menu(),
            summary: self.summary(),
        }
    }

    fn ensure_known(&self, id: ItemId) -> Result<(), CartError> {
        if self.catalog.contains(id) {
            Ok(())
        } else {
            Err(CartError::InvalidItem(id))
        }
    }
}
