use std::collections::BTreeMap;

use crate::domain::catalog::model::CatalogItem;
use crate::domain::shared::value_objects::{ItemId, Price};

/// Quantities requested in the current session.
///
/// Only positive quantities are stored: an entry that would drop to zero is
/// removed, so a lookup distinguishes "absent" from any count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    entries: BTreeMap<ItemId, u32>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self, id: ItemId) -> Option<u32> {
        self.entries.get(&id).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.entries.iter().map(|(id, qty)| (*id, *qty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds one unit, treating an absent entry as 0.
    pub(crate) fn add_one(&mut self, id: ItemId) -> u32 {
        let qty = self.entries.entry(id).or_insert(0);
        *qty = qty.saturating_add(1);
        *qty
    }

    /// Removes one unit. Absent entries stay absent.
    pub(crate) fn remove_one(&mut self, id: ItemId) -> Option<u32> {
        let qty = self.entries.get_mut(&id)?;
        *qty -= 1;
        if *qty == 0 {
            self.entries.remove(&id);
            return None;
        }
        Some(*qty)
    }
}

/// A present cart entry resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item: CatalogItem,
    pub quantity: u32,
    pub subtotal: Price,
}

/// A catalog item with its counter as shown next to the +/- controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    pub item: CatalogItem,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: Price,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Summary panel caption.
    pub fn total_label(&self) -> String {
        format!("Итого: {}", self.total)
    }
}

/// Everything needed to render the ordering screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub menu: Vec<MenuLine>,
    pub summary: CartSummary,
}
