//! Display targets and notifications.
//!
//! # Data Flow
//! ```text
//! Probe outcome
//!     → DisplayTarget (loading / success / error, one target per endpoint)
//!
//! Batch outcome
//!     → Notifier (one transient success or failure announcement)
//! ```
//!
//! # Design Decisions
//! - Rendering is an observer over probe outcomes; the network layer never
//!   touches a display surface directly
//! - The board maps every endpoint to exactly one target, so concurrent
//!   probes never contend for the same surface

pub mod console;

use std::sync::Arc;

use serde_json::Value;

use crate::probe::endpoints::Endpoint;

pub use console::{ConsolePanel, LogNotifier};

/// Rendering surface for one endpoint's latest outcome.
pub trait DisplayTarget: Send + Sync {
    /// A probe for this endpoint is in flight.
    fn set_loading(&self);

    /// The probe succeeded; render the JSON body.
    fn set_success(&self, body: &Value);

    /// The probe failed; render the error message.
    fn set_error(&self, message: &str);
}

/// Transient announcement surface, the modal/notification analog.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, title: &str, message: &str);
}

/// Immutable endpoint → display-target mapping.
///
/// Construction requires a target for every endpoint, so lookups are
/// always total.
pub struct DisplayBoard {
    targets: [Arc<dyn DisplayTarget>; 4],
}

impl DisplayBoard {
    /// Build a board by asking `make` for each endpoint's target.
    pub fn from_fn(make: impl Fn(Endpoint) -> Arc<dyn DisplayTarget>) -> Self {
        Self {
            targets: Endpoint::ALL.map(make),
        }
    }

    /// Board rendering every endpoint to the terminal.
    pub fn console() -> Self {
        Self::from_fn(|endpoint| Arc::new(ConsolePanel::new(endpoint)) as Arc<dyn DisplayTarget>)
    }

    /// The display target owned by `endpoint`.
    pub fn target(&self, endpoint: Endpoint) -> &dyn DisplayTarget {
        self.targets[endpoint.index()].as_ref()
    }
}
