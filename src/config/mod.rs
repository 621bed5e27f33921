//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overrides: BACKEND_URL, PORT)
//!     → validation.rs (semantic checks)
//!     → ConsoleConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so a missing or empty file is valid
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports all errors, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{BackendConfig, ConsoleConfig, ListenerConfig, ObservabilityConfig};
