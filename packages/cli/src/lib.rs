// ABOUTME: Command-line front end for agent configuration lookups
// ABOUTME: Argument parsing, logging setup and command dispatch for the syntera-agent-config binary

pub mod commands;

pub use commands::{run, Cli, Commands};

/// Install the global tracing subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
