use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(pool: SqlitePool, metrics_handle: Option<PrometheusHandle>) -> Self {
        Self {
            pool,
            metrics_handle,
        }
    }
}
