//! Endpoint probing subsystem.
//!
//! # Data Flow
//! ```text
//! Single probe (client.rs):
//!     Endpoint descriptor
//!     → GET {base_url}{path} with JSON headers
//!     → classify: 2xx+JSON = Ok, non-2xx = Http, transport = Network
//!
//! Batch (batch.rs):
//!     All four endpoints issued concurrently (fire-then-join)
//!     → each renders into its own display target
//!     → per-endpoint results collected into a BatchReport
//!     → aggregate pass/fail derived from the detailed results
//! ```
//!
//! # Design Decisions
//! - The client is pure network + classification; rendering lives behind
//!   the display-target abstraction and never leaks in here
//! - A call resolves exactly once: no retry, no automatic re-issue
//! - The per-request deadline is configuration, so a hung backend cannot
//!   stall a probe slot forever

pub mod batch;
pub mod client;
pub mod endpoints;
pub mod outcome;

pub use batch::{announce, probe, run_batch, BatchReport, EndpointResult};
pub use client::EndpointClient;
pub use endpoints::Endpoint;
pub use outcome::ProbeError;
