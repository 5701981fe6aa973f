//! CLI binary entry point for starfetch-convert

use anyhow::{Context, Result};
use clap::Parser;
use starfetch_convert::cli::commands::convert::{ConvertArgs, handle_convert};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "starfetch-convert")]
#[command(about = "Rewrite a legacy starfetch constellation file in the renderer layout")]
#[command(version)]
struct Cli {
    /// Constellation JSON file to convert in place
    input: PathBuf,
    /// Keep the declination field in the converted file
    #[arg(long)]
    keep_declination: bool,
    /// Pretty-print the converted JSON
    #[arg(short, long)]
    pretty: bool,
    /// Print the converted JSON to stdout instead of overwriting the file
    #[arg(long)]
    dry_run: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let args = ConvertArgs {
        input: cli.input,
        keep_declination: cli.keep_declination,
        pretty: cli.pretty,
        dry_run: cli.dry_run,
    };

    handle_convert(&args)
        .with_context(|| format!("Failed to convert {}", args.input.display()))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
