use std::env;
use std::fmt;
use std::num::ParseIntError;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::constants::{
    AGENT_CONFIG_STRICT_DEFAULTS, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
    SUPABASE_CONNECT_TIMEOUT_SECS, SUPABASE_REQUEST_TIMEOUT_SECS, SUPABASE_SERVICE_ROLE_KEY,
    SUPABASE_URL,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid Supabase URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Invalid number for {var}: {source}")]
    InvalidNumber {
        var: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
}

/// Connection settings for the Supabase project backing agent configurations
#[derive(Clone, PartialEq)]
pub struct SupabaseSettings {
    /// Project URL, e.g. `https://abc.supabase.co`
    pub url: String,
    /// Service-role key; bypasses row-level security
    pub service_role_key: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Keep explicitly stored zero/empty values instead of replacing them with defaults
    pub strict_defaults: bool,
}

impl SupabaseSettings {
    /// Build settings from a URL and key, using default transport settings
    pub fn new(url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            service_role_key: service_role_key.into(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            strict_defaults: false,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let url = required(SUPABASE_URL)?;
        let service_role_key = required(SUPABASE_SERVICE_ROLE_KEY)?;

        let request_timeout = Duration::from_secs(seconds(
            SUPABASE_REQUEST_TIMEOUT_SECS,
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);
        let connect_timeout = Duration::from_secs(seconds(
            SUPABASE_CONNECT_TIMEOUT_SECS,
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?);

        let strict_defaults = match env::var(AGENT_CONFIG_STRICT_DEFAULTS) {
            Ok(value) => parse_bool(AGENT_CONFIG_STRICT_DEFAULTS, &value)?,
            Err(_) => false,
        };

        let settings = Self {
            url,
            service_role_key,
            request_timeout,
            connect_timeout,
            strict_defaults,
        };
        settings.validate()?;

        debug!(
            url = %settings.url,
            request_timeout_secs = settings.request_timeout.as_secs(),
            strict_defaults = settings.strict_defaults,
            "Loaded Supabase settings from environment"
        );
        Ok(settings)
    }

    /// Check that the URL parses as http(s) and the key is present
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_role_key.trim().is_empty() {
            return Err(ConfigError::Missing(SUPABASE_SERVICE_ROLE_KEY));
        }

        let parsed = Url::parse(&self.url).map_err(|e| ConfigError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigError::InvalidUrl {
                url: self.url.clone(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }

    /// REST endpoint root: `<url>/rest/v1`
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }
}

// Never print the service-role key
impl fmt::Debug for SupabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupabaseSettings")
            .field("url", &self.url)
            .field("service_role_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("strict_defaults", &self.strict_defaults)
            .finish()
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::Missing(var)),
    }
}

fn seconds(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|source| ConfigError::InvalidNumber { var, source }),
        Err(_) => Ok(default),
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            SUPABASE_URL,
            SUPABASE_SERVICE_ROLE_KEY,
            SUPABASE_REQUEST_TIMEOUT_SECS,
            SUPABASE_CONNECT_TIMEOUT_SECS,
            AGENT_CONFIG_STRICT_DEFAULTS,
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var(SUPABASE_URL, "https://abc.supabase.co");
        env::set_var(SUPABASE_SERVICE_ROLE_KEY, "service-key");

        let settings = SupabaseSettings::from_env().unwrap();

        assert_eq!(settings.url, "https://abc.supabase.co");
        assert_eq!(settings.service_role_key, "service-key");
        assert_eq!(settings.request_timeout, Duration::from_secs(30));
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert!(!settings.strict_defaults);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var(SUPABASE_URL, "http://localhost:54321");
        env::set_var(SUPABASE_SERVICE_ROLE_KEY, "local-key");
        env::set_var(SUPABASE_REQUEST_TIMEOUT_SECS, "5");
        env::set_var(SUPABASE_CONNECT_TIMEOUT_SECS, "2");
        env::set_var(AGENT_CONFIG_STRICT_DEFAULTS, "true");

        let settings = SupabaseSettings::from_env().unwrap();

        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.connect_timeout, Duration::from_secs(2));
        assert!(settings.strict_defaults);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_url() {
        clear_env();
        env::set_var(SUPABASE_SERVICE_ROLE_KEY, "service-key");

        let result = SupabaseSettings::from_env();
        assert!(matches!(result, Err(ConfigError::Missing(SUPABASE_URL))));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_key() {
        clear_env();
        env::set_var(SUPABASE_URL, "https://abc.supabase.co");
        env::set_var(SUPABASE_SERVICE_ROLE_KEY, "   ");

        let result = SupabaseSettings::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::Missing(SUPABASE_SERVICE_ROLE_KEY))
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_timeout() {
        clear_env();
        env::set_var(SUPABASE_URL, "https://abc.supabase.co");
        env::set_var(SUPABASE_SERVICE_ROLE_KEY, "service-key");
        env::set_var(SUPABASE_REQUEST_TIMEOUT_SECS, "soon");

        let result = SupabaseSettings::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber {
                var: SUPABASE_REQUEST_TIMEOUT_SECS,
                ..
            })
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_strict_flag() {
        clear_env();
        env::set_var(SUPABASE_URL, "https://abc.supabase.co");
        env::set_var(SUPABASE_SERVICE_ROLE_KEY, "service-key");
        env::set_var(AGENT_CONFIG_STRICT_DEFAULTS, "maybe");

        let result = SupabaseSettings::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidBool { .. })));

        clear_env();
    }

    #[rstest]
    #[case("not a url")]
    #[case("ftp://abc.supabase.co")]
    #[case("abc.supabase.co")]
    fn test_invalid_urls(#[case] url: &str) {
        let settings = SupabaseSettings::new(url, "service-key");
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[rstest]
    #[case("https://abc.supabase.co", "https://abc.supabase.co/rest/v1")]
    #[case("https://abc.supabase.co/", "https://abc.supabase.co/rest/v1")]
    #[case("http://localhost:54321", "http://localhost:54321/rest/v1")]
    fn test_rest_url(#[case] url: &str, #[case] expected: &str) {
        let settings = SupabaseSettings::new(url, "service-key");
        assert!(settings.validate().is_ok());
        assert_eq!(settings.rest_url(), expected);
    }

    #[test]
    fn test_debug_redacts_key() {
        let settings = SupabaseSettings::new("https://abc.supabase.co", "super-secret");
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
