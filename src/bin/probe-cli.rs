//! Probe CLI for the backend API.
//!
//! Exercises the four backend endpoints individually or as a concurrent
//! batch, rendering outcomes to the terminal.

use clap::{Parser, Subcommand};

use api_console::config::{loader, ObservabilityConfig};
use api_console::display::{ConsolePanel, DisplayBoard, LogNotifier, Notifier};
use api_console::observability::logging;
use api_console::probe::{announce, probe, run_batch, Endpoint, EndpointClient};

#[derive(Parser)]
#[command(name = "probe-cli")]
#[command(about = "Probe the backend API endpoints", long_about = None)]
struct Cli {
    /// Backend base URL (overrides config and BACKEND_URL)
    #[arg(short, long)]
    url: Option<String>,

    /// Per-request deadline in seconds; 0 disables the deadline
    #[arg(short, long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the welcome payload from the backend root
    Welcome,
    /// Fetch the secret payload
    Secret,
    /// Fetch a random payload
    Random,
    /// Fetch the backend health report
    Health,
    /// Probe all four endpoints concurrently
    All,
    /// Check backend reachability without fetching a payload
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&ObservabilityConfig {
        log_level: "warn".to_string(),
    });

    let mut config = loader::load_default_config()?;
    if let Some(url) = cli.url {
        config.backend.base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(timeout) = cli.timeout_secs {
        config.backend.request_timeout_secs = timeout;
    }

    let client = EndpointClient::new(&config.backend)?;

    let code = match cli.command {
        Commands::Welcome => probe_one(&client, Endpoint::Welcome).await,
        Commands::Secret => probe_one(&client, Endpoint::Secret).await,
        Commands::Random => probe_one(&client, Endpoint::Random).await,
        Commands::Health => probe_one(&client, Endpoint::Health).await,
        Commands::All => {
            let board = DisplayBoard::console();
            let report = run_batch(&client, &board).await;
            announce(&report, &LogNotifier);
            if report.all_succeeded() {
                0
            } else {
                1
            }
        }
        Commands::Check => match client.connectivity_check().await {
            Ok(()) => {
                println!("backend reachable: {}", client.base_url());
                0
            }
            Err(error) => {
                eprintln!("backend unreachable: {}", error);
                1
            }
        },
    };

    std::process::exit(code);
}

/// Probe a single endpoint through a console panel; failures also raise a
/// notification, matching the interactive per-call behavior.
async fn probe_one(client: &EndpointClient, endpoint: Endpoint) -> i32 {
    let panel = ConsolePanel::new(endpoint);
    let result = probe(client, endpoint, &panel).await;

    match &result.outcome {
        Ok(_) => 0,
        Err(error) => {
            LogNotifier.failure(
                &format!("failed to fetch {}", endpoint.path()),
                &error.detail(),
            );
            1
        }
    }
}
