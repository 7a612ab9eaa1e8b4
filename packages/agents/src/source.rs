// ABOUTME: Where agent configuration rows come from
// ABOUTME: The AgentConfigSource seam and its Supabase-backed implementations

use async_trait::async_trait;
use syntera_supabase::{ClientProvider, SupabaseClient, SupabaseResult};

use crate::types::AgentConfigRow;

pub const AGENT_CONFIGS_TABLE: &str = "agent_configs";

pub const AGENT_CONFIG_COLUMNS: [&str; 8] = [
    "id",
    "company_id",
    "name",
    "description",
    "model",
    "system_prompt",
    "temperature",
    "voice_settings",
];

/// Looks up a single agent configuration row by primary key
#[async_trait]
pub trait AgentConfigSource: Send + Sync {
    /// `Ok(None)` when no row has this id
    async fn fetch_agent_config_row(&self, agent_id: &str)
        -> SupabaseResult<Option<AgentConfigRow>>;
}

#[async_trait]
impl AgentConfigSource for SupabaseClient {
    async fn fetch_agent_config_row(
        &self,
        agent_id: &str,
    ) -> SupabaseResult<Option<AgentConfigRow>> {
        self.select_single(AGENT_CONFIGS_TABLE, &AGENT_CONFIG_COLUMNS, &[("id", agent_id)])
            .await
    }
}

// Builds the client on first lookup; a construction failure surfaces as the lookup's error.
#[async_trait]
impl AgentConfigSource for ClientProvider {
    async fn fetch_agent_config_row(
        &self,
        agent_id: &str,
    ) -> SupabaseResult<Option<AgentConfigRow>> {
        let client = self.client().await?;
        client.fetch_agent_config_row(agent_id).await
    }
}

/// Check that the `agent_configs` table is reachable
pub async fn verify_agent_configs(client: &SupabaseClient) -> SupabaseResult<()> {
    client.verify_table(AGENT_CONFIGS_TABLE).await
}
