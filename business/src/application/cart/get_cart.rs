use std::sync::Arc;

use crate::domain::cart::model::CartView;
use crate::domain::cart::session::CartSession;
use crate::domain::cart::use_cases::get_cart::GetCartUseCase;
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl GetCartUseCase for GetCartUseCaseImpl {
    fn execute(&self) -> CartView {
        let view = self.session.with_store(|store| store.view());
        self.logger.debug(&format!(
            "Cart has {} lines, total {}",
            view.summary.lines.len(),
            view.summary.total
        ));
        view
    }
}
