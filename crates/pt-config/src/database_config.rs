use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite file, relative to the config directory.
    pub path: String,
    pub max_connections: u32,
    /// Driver-level busy timeout in seconds; timeouts are the storage
    /// client's responsibility, not the core logic's.
    pub busy_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "tracker.db".to_string(),
            max_connections: 10,
            busy_timeout_secs: 5,
        }
    }
}
