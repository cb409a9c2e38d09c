use crate::domain::cart::model::CartView;

pub trait GetCartUseCase: Send + Sync {
    fn execute(&self) -> CartView;
}
