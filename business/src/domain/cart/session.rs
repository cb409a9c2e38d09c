use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::catalog::model::Catalog;

use super::store::CartStore;

/// The single cart of a running session.
///
/// Access is exclusive: each closure runs to completion before the next caller
/// sees the store, so actions are applied one at a time in arrival order.
#[derive(Debug)]
pub struct CartSession {
    store: Mutex<CartStore>,
}

impl CartSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            store: Mutex::new(CartStore::new(catalog)),
        }
    }

    pub fn with_store<R>(&self, f: impl FnOnce(&mut CartStore) -> R) -> R {
        // Store mutations never panic half-way, so a poisoned lock still holds a valid cart.
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}
