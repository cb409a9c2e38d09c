#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.empty_cart")]
    EmptyCart,
    /// The backend answered but refused the order.
    #[error("order.rejected")]
    Rejected(String),
    #[error("order.backend_unavailable")]
    BackendUnavailable(String),
}
