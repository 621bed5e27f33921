//! Console for a remote JSON API backend.
//!
//! Two surfaces over one library:
//! - a static-file server (`api-console`) exposing the demo page and a
//!   health-check route;
//! - a probe CLI (`probe-cli`) that exercises the backend's four fixed
//!   endpoints, individually or as a concurrent batch.
//!
//! The probe layer is pure network + outcome classification; rendering goes
//! through the display-target abstraction in [`display`].

pub mod config;
pub mod display;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod probe;

pub use config::ConsoleConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use probe::{Endpoint, EndpointClient};
