//! Service configuration.

/// Which snapshot backend the service runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// JSON file on disk (durable).
    File,
    /// In-process only (ephemeral, mostly for local experiments and tests).
    Memory,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:3001").
    pub listen_addr: String,

    /// Path of the JSON data file (default: "data/database.json").
    pub data_file: String,

    /// Snapshot backend (default: file).
    pub persistence: Persistence,

    /// Auto-save checkpoint interval in seconds (default: 30).
    pub autosave_interval_seconds: u64,

    /// Whether to create sample data when the store is empty (default: true).
    pub seed_sample_data: bool,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            data_file: std::env::var("DATA_FILE").unwrap_or(defaults.data_file),
            persistence: match std::env::var("PERSISTENCE").as_deref() {
                Ok("memory" | "in-memory") => Persistence::Memory,
                _ => Persistence::File,
            },
            autosave_interval_seconds: std::env::var("AUTOSAVE_INTERVAL_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.autosave_interval_seconds),
            seed_sample_data: std::env::var("SEED_SAMPLE_DATA")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed_sample_data),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_bytes),
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.request_timeout_seconds),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3001".into(),
            data_file: "data/database.json".into(),
            persistence: Persistence::File,
            autosave_interval_seconds: 30,
            seed_sample_data: true,
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024, // 1MB
            request_timeout_seconds: 30,
        }
    }
}
