//! Terminal rendering of probe outcomes.

use serde_json::Value;

use crate::display::{DisplayTarget, Notifier};
use crate::probe::endpoints::Endpoint;

/// Renders one endpoint's outcome to stdout/stderr under its target label.
pub struct ConsolePanel {
    label: &'static str,
}

impl ConsolePanel {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            label: endpoint.display_target(),
        }
    }
}

impl DisplayTarget for ConsolePanel {
    fn set_loading(&self) {
        println!("[{}] loading...", self.label);
    }

    fn set_success(&self, body: &Value) {
        let pretty = serde_json::to_string_pretty(body)
            .unwrap_or_else(|_| body.to_string());
        println!("[{}]\n{}", self.label, pretty);
    }

    fn set_error(&self, message: &str) {
        eprintln!("[{}] error: {}", self.label, message);
    }
}

/// Announces batch outcomes through the log and stderr.
///
/// Auto-dismiss belongs to the browser modal this replaces; a terminal
/// line needs none.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{}", message);
        println!("OK: {}", message);
    }

    fn failure(&self, title: &str, message: &str) {
        tracing::error!(title = title, "{}", message);
        eprintln!("FAILED: {}: {}", title, message);
    }
}
