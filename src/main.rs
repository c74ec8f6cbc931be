//! Main entry point for the geolocator CLI tool
//!
//! Looks up one IP address or host name (or the caller's own address)
//! through the ip-api.com service and prints the answer.

use clap::Parser;
use geolocator::cli::Cli;
use geolocator::config::AppConfig;
use log::info;

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}, using defaults", e);
        AppConfig::default()
    });

    // Initialize logging; RUST_LOG still wins over the default filter
    let default_filter = if cli.verbose || config.global.verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    info!("Starting geolocator v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli.run(config) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
