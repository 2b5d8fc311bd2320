//! Swagger generator - command-line tool for documenting a route-based web application.
//!
//! Reads the application's route table and the doc comments of its controller actions,
//! and writes a Swagger 2.0 JSON document to `<storage>/appDoc/resource.json`.
//!
//! # Usage
//!
//! ```bash
//! swagger-from-routes [OPTIONS] --routes <FILE> <PROJECT_PATH>
//! ```
//!
//! # Examples
//!
//! Generate the document for a Laravel application:
//! ```bash
//! php artisan route:list --json > routes.json
//! swagger-from-routes ./my-app -r routes.json
//! ```
//!
//! Print the document instead of writing it, with verbose logging:
//! ```bash
//! swagger-from-routes ./my-app -r routes.json --stdout -v
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use swagger_from_routes::cli;

fn main() -> Result<()> {
    // Parse first so the verbose flag can pick the log level
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Swagger generator starting...");

    let args = cli::parse_args_from_parsed(args)?;

    cli::run(args)?;

    info!("Swagger document generation completed successfully");

    Ok(())
}
