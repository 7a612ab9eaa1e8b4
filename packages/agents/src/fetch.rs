use std::sync::Arc;
use syntera_config::SupabaseSettings;
use syntera_supabase::ClientProvider;
use tracing::{debug, error};

use crate::error::{AgentConfigError, AgentConfigResult};
use crate::source::AgentConfigSource;
use crate::types::{AgentConfig, DefaultingPolicy};

/// Fetch and normalize an agent configuration with the default (falsy) policy
pub async fn get_agent_config<S>(source: &S, agent_id: &str) -> AgentConfigResult<AgentConfig>
where
    S: AgentConfigSource + ?Sized,
{
    get_agent_config_with_policy(source, agent_id, DefaultingPolicy::default()).await
}

/// Fetch and normalize an agent configuration.
///
/// Every failure is logged once here, with the agent id, and returned unchanged.
pub async fn get_agent_config_with_policy<S>(
    source: &S,
    agent_id: &str,
    policy: DefaultingPolicy,
) -> AgentConfigResult<AgentConfig>
where
    S: AgentConfigSource + ?Sized,
{
    match fetch_and_normalize(source, agent_id, policy).await {
        Ok(config) => {
            debug!(agent_id, model = %config.model, "Fetched agent config");
            Ok(config)
        }
        Err(e) => {
            error!(agent_id, error = %e, "Failed to fetch agent config");
            Err(e)
        }
    }
}

async fn fetch_and_normalize<S>(
    source: &S,
    agent_id: &str,
    policy: DefaultingPolicy,
) -> AgentConfigResult<AgentConfig>
where
    S: AgentConfigSource + ?Sized,
{
    if agent_id.trim().is_empty() {
        return Err(AgentConfigError::InvalidId);
    }

    let row = source
        .fetch_agent_config_row(agent_id)
        .await?
        .ok_or_else(|| AgentConfigError::NotFound(agent_id.to_string()))?;

    Ok(AgentConfig::from_row(row, policy))
}

/// Agent config lookups bound to one shared client provider and policy
#[derive(Clone)]
pub struct AgentConfigService {
    provider: Arc<ClientProvider>,
    policy: DefaultingPolicy,
}

impl AgentConfigService {
    pub fn new(provider: Arc<ClientProvider>, policy: DefaultingPolicy) -> Self {
        Self { provider, policy }
    }

    /// Build a provider from settings, taking the policy from `strict_defaults`
    pub fn from_settings(settings: SupabaseSettings) -> Self {
        let policy = DefaultingPolicy::from_strict_flag(settings.strict_defaults);
        Self::new(Arc::new(ClientProvider::new(settings)), policy)
    }

    pub async fn get(&self, agent_id: &str) -> AgentConfigResult<AgentConfig> {
        get_agent_config_with_policy(self.provider.as_ref(), agent_id, self.policy).await
    }

    pub fn provider(&self) -> &Arc<ClientProvider> {
        &self.provider
    }

    pub fn policy(&self) -> DefaultingPolicy {
        self.policy
    }
}
