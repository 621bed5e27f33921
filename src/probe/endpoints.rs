//! The fixed set of backend endpoints the console can query.

use std::fmt;

/// One of the four known backend endpoints.
///
/// The set is fixed at startup; every endpoint owns exactly one display
/// target, so concurrent probes never write to the same surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Greeting payload at the backend root.
    Welcome,
    /// Environment-backed secret data.
    Secret,
    /// Randomly generated payload.
    Random,
    /// Backend liveness report.
    Health,
}

impl Endpoint {
    /// All endpoints, in the order they are rendered.
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Welcome,
        Endpoint::Secret,
        Endpoint::Random,
        Endpoint::Health,
    ];

    /// Request path relative to the backend base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Welcome => "/",
            Endpoint::Secret => "/secret",
            Endpoint::Random => "/random",
            Endpoint::Health => "/health",
        }
    }

    /// Identifier of the display target this endpoint renders into.
    pub fn display_target(self) -> &'static str {
        match self {
            Endpoint::Welcome => "welcome-response",
            Endpoint::Secret => "secret-response",
            Endpoint::Random => "random-response",
            Endpoint::Health => "health-response",
        }
    }

    /// Short name used in logs and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Welcome => "welcome",
            Endpoint::Secret => "secret",
            Endpoint::Random => "random",
            Endpoint::Health => "health",
        }
    }

    /// Position in [`Endpoint::ALL`]; used to index per-endpoint storage.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
