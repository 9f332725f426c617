//! upcheck - colorized status viewer for nginx upstream health checks.
//!
//! Issues a single GET against the upstream check module's JSON status page
//! and prints one line per server, grouped by upstream.

use std::io;
use std::process;

use clap::Parser;
use console::style;
use upcheck_client::{CheckReport, StatusClient};

mod render;

/// Default status endpoint exposed by the upstream check module.
const DEFAULT_STATUS_URL: &str = "http://localhost:80/nginx/check?format=json";

/// Colorized status viewer for nginx upstream health checks.
#[derive(Parser)]
#[command(name = "upcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Upstream check status page URL
    #[arg(long, default_value = DEFAULT_STATUS_URL)]
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let report = match fetch(&cli.url).await {
        Ok(report) => report,
        Err(err) => {
            let label = if err.is_decode() {
                "JSON decoding failed:"
            } else {
                "HTTP request failed:"
            };
            println!("{} {}", style(label).red(), err);
            process::exit(1);
        }
    };

    tracing::debug!(
        total = report.servers.total,
        generation = report.servers.generation,
        "decoded status report"
    );

    let stdout = io::stdout();
    if let Err(err) = render::render_report(&mut stdout.lock(), &report) {
        println!("{} {}", style("writing report failed:").red(), err);
        process::exit(1);
    }
}

async fn fetch(url: &str) -> upcheck_client::Result<CheckReport> {
    StatusClient::new(url)?.fetch().await
}
