//! Service entry point.
//!
//! This is a minimal entrypoint that:
//! 1. Delegates to server::run (config, store handle, serving loop)
//! 2. Prints errors to stderr
//! 3. Exits with non-zero on failure

use presence_api::server;

#[tokio::main]
async fn main() {
    if let Err(e) = server::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
