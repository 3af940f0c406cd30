use crate::utils::{Method, Metrics, Status};
use std::fmt::Display;
use tokio::time::Instant;
use tracing::{error, info};

/// Timing and logging for one service call.
pub struct TracingContext {
    operation: &'static str,
    method: Method,
    start_time: Instant,
}

impl TracingContext {
    pub fn start(operation: &'static str, method: Method) -> Self {
        info!("Starting operation: {operation}");
        Self {
            operation,
            method,
            start_time: Instant::now(),
        }
    }

    /// Logs the outcome and records it into `metrics`.
    pub fn complete<T, E: Display>(self, metrics: &Metrics, result: &Result<T, E>) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let operation = self.operation;

        let status = match result {
            Ok(_) => {
                info!("✅ Operation completed successfully: {operation} ({elapsed:.3}s)");
                Status::Success
            }
            Err(e) => {
                error!("❌ Operation failed: {operation}: {e}");
                Status::Error
            }
        };

        metrics.record(self.method, status, elapsed);
    }
}
