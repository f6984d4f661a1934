//! # ontosync
//!
//! Command-line front end for the ontosync synchronization engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │           apps/ontosync (THE BINARY)         │
//! │                                              │
//! │   ┌─────────────┐      ┌────────────────┐    │
//! │   │    CLI      │      │  file loading  │    │
//! │   │   (clap)    │      │ (json/snapshot)│    │
//! │   └──────┬──────┘      └───────┬────────┘    │
//! │          └───────────┬─────────┘             │
//! │                      ▼                       │
//! │              ┌───────────────┐               │
//! │              │ ontosync-core │               │
//! │              │ (THE ENGINE)  │               │
//! │              └───────────────┘               │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! ontosync normalize -i raw.json -o canonical.onto
//! ontosync axioms -i canonical.onto -k SubClassOf
//! ontosync --strict --config engine.toml stats -i canonical.onto
//! ```

use clap::Parser;
use ontosync::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // ONTOSYNC_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("ONTOSYNC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ontosync=info,ontosync_core=warn".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
