use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::shared::value_objects::ItemId;

pub struct DecrementItemParams {
    pub item_id: ItemId,
}

pub trait DecrementItemUseCase: Send + Sync {
    fn execute(&self, params: DecrementItemParams) -> Result<CartSummary, CartError>;
}
