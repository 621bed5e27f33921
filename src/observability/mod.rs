//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through `tracing`; `RUST_LOG` always wins over the
//!   configured level
//! - Request IDs flow through the server middleware into log lines
//! - Probe timings are logged, with a warn threshold for slow backends

pub mod logging;
