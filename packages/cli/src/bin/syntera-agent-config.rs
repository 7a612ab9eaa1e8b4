use clap::Parser;
use colored::*;
use std::process;

use syntera_cli::{init_tracing, run, Cli};

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
