//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, timeout)
//!     → route-case normalization (defined routes match case-insensitively)
//!     → /health, /config (handlers.rs)
//!     → everything else: static files, falling back to the index document
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::MakeConsoleRequestId;
pub use server::HttpServer;
