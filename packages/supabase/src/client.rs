use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use syntera_config::SupabaseSettings;
use tracing::{debug, info};

use crate::error::{SupabaseError, SupabaseResult};

/// Media type asking PostgREST for a single JSON object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// PostgREST code for "JSON object requested, multiple (or no) rows returned"
const NO_SINGLE_ROW_CODE: &str = "PGRST116";

/// Error body returned by PostgREST on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostgrestErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl PostgrestErrorBody {
    /// Single-object request matched zero rows
    pub fn is_no_rows(&self) -> bool {
        self.code.as_deref() == Some(NO_SINGLE_ROW_CODE)
            && self
                .details
                .as_deref()
                .map(|d| d.contains(" 0 rows"))
                .unwrap_or(false)
    }
}

/// Server-side client for a Supabase project, authenticated with the service-role key
#[derive(Clone)]
pub struct SupabaseClient {
    http_client: Client,
    rest_url: String,
    service_role_key: String,
}

impl SupabaseClient {
    /// Create a client. Validates the settings but makes no network call.
    pub fn new(settings: &SupabaseSettings) -> SupabaseResult<Self> {
        settings.validate()?;

        let http_client = Client::builder()
            .timeout(settings.request_timeout)
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|e| SupabaseError::config(e.to_string()))?;

        Ok(Self {
            http_client,
            rest_url: settings.rest_url(),
            service_role_key: settings.service_role_key.clone(),
        })
    }

    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.service_role_key)
            .header("Authorization", format!("Bearer {}", self.service_role_key))
    }

    /// Fetch exactly one row from `table`, filtering each `(column, value)` pair with `eq`.
    ///
    /// Returns `Ok(None)` when no row matches. More than one match is reported
    /// as [`SupabaseError::Api`] since PostgREST refuses to coerce it to an object.
    pub async fn select_single<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &[&str],
        filters: &[(&str, &str)],
    ) -> SupabaseResult<Option<T>> {
        let mut query: Vec<(String, String)> = vec![("select".to_string(), columns.join(","))];
        query.extend(
            filters
                .iter()
                .map(|(column, value)| (column.to_string(), format!("eq.{}", value))),
        );

        debug!(table, ?filters, "Selecting single row");

        let response = self
            .authorized(self.http_client.get(self.table_url(table)))
            .header("Accept", SINGLE_OBJECT)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            let value: serde_json::Value = serde_json::from_str(&body)?;
            if value.is_null() {
                return Ok(None);
            }
            let row = serde_json::from_value::<T>(value)?;
            return Ok(Some(row));
        }

        let body = response.text().await.unwrap_or_default();
        let error_body: PostgrestErrorBody = serde_json::from_str(&body).unwrap_or_default();

        if status == StatusCode::NOT_ACCEPTABLE && error_body.is_no_rows() {
            return Ok(None);
        }

        Err(api_error(status, error_body, body))
    }

    /// Check that `table` is reachable with the configured key
    pub async fn verify_table(&self, table: &str) -> SupabaseResult<()> {
        let response = self
            .authorized(self.http_client.get(self.table_url(table)))
            .query(&[("select", "id"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(table, "Supabase connection verified");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let error_body: PostgrestErrorBody = serde_json::from_str(&body).unwrap_or_default();
        Err(api_error(status, error_body, body))
    }
}

fn api_error(status: StatusCode, error_body: PostgrestErrorBody, raw: String) -> SupabaseError {
    let message = error_body
        .message
        .or_else(|| (!raw.is_empty()).then_some(raw))
        .unwrap_or_else(|| status.to_string());

    SupabaseError::Api {
        status: status.as_u16(),
        code: error_body.code,
        message,
    }
}
