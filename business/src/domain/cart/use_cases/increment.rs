use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::shared::value_objects::ItemId;

pub struct IncrementItemParams {
    pub item_id: ItemId,
}

pub trait IncrementItemUseCase: Send + Sync {
    fn execute(&self, params: IncrementItemParams) -> Result<CartSummary, CartError>;
}
