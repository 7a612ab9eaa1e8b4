// ABOUTME: Agent configuration lookup for Syntera agent services
// ABOUTME: Fetches agent_configs rows from Supabase and normalizes them with defaults

pub mod error;
pub mod fetch;
pub mod source;
pub mod types;

pub use error::{AgentConfigError, AgentConfigResult};
pub use fetch::{get_agent_config, get_agent_config_with_policy, AgentConfigService};
pub use source::{verify_agent_configs, AgentConfigSource, AGENT_CONFIGS_TABLE};
pub use types::{AgentConfig, AgentConfigRow, DefaultingPolicy};
