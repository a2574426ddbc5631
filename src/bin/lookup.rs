//! Look up one or more students and print each record as a JSON line.
//!
//! Configuration comes from `PORTAL_URL` (optional) and `DEFAULT_PASSWORD`.
//! Log verbosity follows `RUST_LOG` (default `portal_results=info`).
//!
//! ```text
//! DEFAULT_PASSWORD=... cargo run --features cli --bin lookup -- 1124693617 1124693618
//! ```

use portal_results::{PortalClient, lookup_many};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portal_results=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let identifiers: Vec<String> = std::env::args().skip(1).collect();
    if identifiers.is_empty() {
        eprintln!("usage: lookup <identifier>...");
        std::process::exit(2);
    }

    let client = PortalClient::from_env()?;
    tracing::info!(count = identifiers.len(), "starting lookups");

    for record in lookup_many(&client, &identifiers).await {
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}
