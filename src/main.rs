//! FundMyChai command-line entrypoint.
//!
//! - Loads `.env` variables.
//! - Initializes the tracing subscriber.
//! - Parses and runs one subcommand against the local store.

use dotenvy::dotenv;

#[tokio::main]
async fn main() {
    // Load .env variables
    dotenv().ok();

    fundmychai::telemetry::init();

    if let Err(error) = fundmychai::cli::run().await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
