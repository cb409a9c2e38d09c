use crate::domain::shared::value_objects::ItemId;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// The id does not belong to the session catalog.
    #[error("cart.invalid_item")]
    InvalidItem(ItemId),
}
