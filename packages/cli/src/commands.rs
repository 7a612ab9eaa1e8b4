use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use syntera_agents::{verify_agent_configs, AgentConfig, AgentConfigService, DefaultingPolicy};
use syntera_config::SupabaseSettings;
use syntera_supabase::ClientProvider;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "syntera-agent-config")]
#[command(about = "Look up Syntera agent configurations stored in Supabase")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch one agent configuration and print it as JSON
    Get {
        /// Agent id (primary key of agent_configs)
        agent_id: String,
        /// Keep stored zero/empty values instead of applying defaults
        #[arg(long)]
        strict: bool,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Check that the agent_configs table is reachable
    Check,
}

/// Load settings from the environment and run `cli`, printing the result to stdout
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings =
        SupabaseSettings::from_env().context("Failed to load Supabase settings")?;
    let output = execute(cli.command, settings).await?;
    println!("{}", output);
    Ok(())
}

/// Run a command against explicit settings and return what should be printed
pub async fn execute(command: Commands, settings: SupabaseSettings) -> anyhow::Result<String> {
    match command {
        Commands::Get {
            agent_id,
            strict,
            pretty,
        } => {
            let policy = DefaultingPolicy::from_strict_flag(strict || settings.strict_defaults);
            let service = AgentConfigService::new(Arc::new(ClientProvider::new(settings)), policy);

            let config = service.get(&agent_id).await?;
            render_config(&config, pretty)
        }
        Commands::Check => {
            let client = ClientProvider::new(settings).client().await?;
            verify_agent_configs(&client)
                .await
                .context("agent_configs table is not reachable")?;
            info!("agent_configs table reachable");
            Ok("ok".to_string())
        }
    }
}

pub fn render_config(config: &AgentConfig, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    Ok(rendered)
}
