//! arec - Entry Point

// Force-link arec-providers so linkme registrations are included
extern crate arec_providers;

use arec::cli::{Cli, run};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Cli::parse()).await
}
