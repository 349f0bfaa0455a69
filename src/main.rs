//! students-api entry point
//!
//! Minimal entrypoint: configuration loading, storage setup, and serving
//! all happen in `http_server::run`. This file only dispatches and maps
//! failure to a non-zero exit.

use student_api::http_server;

#[tokio::main]
async fn main() {
    if let Err(e) = http_server::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
