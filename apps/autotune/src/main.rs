//! `autotune` -- recommendation settings CLI.
//!
//! # Environment variables
//!
//! | Variable   | Required | Default         | Description          |
//! |------------|----------|-----------------|----------------------|
//! | `RUST_LOG` | no       | `autotune=info` | tracing filter       |

use autotune::cli::{self, Cli};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "autotune=debug"
    } else {
        "autotune=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli::run(&cli) {
        tracing::error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}
