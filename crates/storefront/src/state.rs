use anyhow::Result;
use chrono::Duration;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynHashing,
    config::{Config, ConnectionPool, Hashing},
    di::{DependenciesInject, DependenciesInjectDeps},
    utils::{SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub system_metrics: Arc<SystemMetrics>,
    pub pool: ConnectionPool,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("pool", &"<PgPool>")
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let hashing = Arc::new(Hashing::new()) as DynHashing;
        let registry = Arc::new(Mutex::new(Registry::default()));

        let deps = DependenciesInjectDeps {
            pool: pool.clone(),
            hash: hashing,
            registry: registry.clone(),
            token_ttl: Duration::hours(config.token_ttl_hours),
        };

        let di_container = DependenciesInject::new(deps).await;

        let state = Self::with_container(di_container, pool, registry).await;

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

        Ok(state)
    }

    /// Builds the state around an already wired container and registers the
    /// process gauges. The background collector is not started.
    pub async fn with_container(
        di_container: DependenciesInject,
        pool: ConnectionPool,
        registry: Arc<Mutex<Registry>>,
    ) -> Self {
        let system_metrics = Arc::new(SystemMetrics::new());
        system_metrics.register(&mut *registry.lock().await);

        Self {
            di_container,
            registry,
            system_metrics,
            pool,
        }
    }
}
