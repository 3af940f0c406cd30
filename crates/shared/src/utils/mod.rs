mod logs;
mod metrics;
mod shutdown;
mod token;
mod tracing_ctx;

pub use self::logs::init_logger;
pub use self::metrics::{
    Method, Metrics, Status, SystemMetrics, process_memory_bytes, run_metrics_collector,
};
pub use self::shutdown::shutdown_signal;
pub use self::token::{generate_token, hash_token};
pub use self::tracing_ctx::TracingContext;
