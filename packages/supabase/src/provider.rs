// ABOUTME: Construct-once provider for the shared Supabase client
// ABOUTME: Built at process start and handed to callers instead of a hidden global

use std::sync::Arc;
use syntera_config::SupabaseSettings;
use tokio::sync::OnceCell;
use tracing::info;

use crate::client::SupabaseClient;
use crate::error::SupabaseResult;

/// Lazily builds one [`SupabaseClient`] from its settings and hands out the same instance afterwards.
///
/// There is no refresh or teardown; the client lives as long as the provider.
pub struct ClientProvider {
    settings: SupabaseSettings,
    client: OnceCell<Arc<SupabaseClient>>,
}

impl ClientProvider {
    pub fn new(settings: SupabaseSettings) -> Self {
        Self {
            settings,
            client: OnceCell::new(),
        }
    }

    /// Get the shared client, constructing it on first use.
    ///
    /// Concurrent first calls construct at most once. A failed construction is
    /// not cached, so the next call tries again.
    pub async fn client(&self) -> SupabaseResult<Arc<SupabaseClient>> {
        let client = self
            .client
            .get_or_try_init(|| async {
                let client = SupabaseClient::new(&self.settings)?;
                info!(url = %self.settings.url, "Supabase client initialized");
                Ok::<_, crate::error::SupabaseError>(Arc::new(client))
            })
            .await?;

        Ok(Arc::clone(client))
    }

    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    pub fn settings(&self) -> &SupabaseSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SupabaseError;

    #[tokio::test]
    async fn test_client_is_constructed_once() {
        let provider = ClientProvider::new(SupabaseSettings::new(
            "https://abc.supabase.co",
            "service-key",
        ));
        assert!(!provider.is_initialized());

        let first = provider.client().await.unwrap();
        let second = provider.client().await.unwrap();

        assert!(provider.is_initialized());
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_concurrent_first_use_shares_instance() {
        let provider = Arc::new(ClientProvider::new(SupabaseSettings::new(
            "https://abc.supabase.co",
            "service-key",
        )));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = Arc::clone(&provider);
                tokio::spawn(async move { provider.client().await.unwrap() })
            })
            .collect();

        let mut clients = Vec::new();
        for handle in handles {
            clients.push(handle.await.unwrap());
        }

        for client in &clients[1..] {
            assert!(Arc::ptr_eq(&clients[0], client));
        }
    }

    #[tokio::test]
    async fn test_malformed_url_is_reported_and_not_cached() {
        let provider = ClientProvider::new(SupabaseSettings::new("::nope::", "service-key"));

        let result = provider.client().await;
        assert!(matches!(result, Err(SupabaseError::Configuration(_))));
        assert!(!provider.is_initialized());
    }
}
