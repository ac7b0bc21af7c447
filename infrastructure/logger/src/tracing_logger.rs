use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "larder", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "larder", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "larder", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "larder", "{}", message);
    }
}
