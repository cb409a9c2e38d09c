use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing` under a single target.
pub struct TracingLogger;

impl TracingLogger {
    pub const TARGET: &'static str = "ordering";
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TracingLogger::TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TracingLogger::TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TracingLogger::TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TracingLogger::TARGET, "{}", message);
    }
}
