//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the console.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Remote backend the probe client talks to.
    pub backend: BackendConfig,

    /// Static-file server settings.
    pub listener: ListenerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Remote backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend API (no trailing slash).
    pub base_url: String,

    /// Per-request deadline in seconds. 0 disables the deadline.
    pub request_timeout_secs: u64,

    /// Probe backend reachability once at server startup.
    pub startup_check: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "https://learn-cloud-run-backend-797563351214.us-central1.run.app"
                .to_string(),
            request_timeout_secs: 30,
            startup_check: true,
        }
    }
}

/// Static-file server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,

    /// Directory holding the served page and assets.
    pub static_dir: String,

    /// Request timeout for inbound requests in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            static_dir: "static".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
