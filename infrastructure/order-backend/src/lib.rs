pub mod client;
pub mod http_submitter;
pub mod noop_submitter;

pub use client::OrderBackendClient;
pub use http_submitter::HttpOrderSubmitter;
pub use noop_submitter::NoopOrderSubmitter;
