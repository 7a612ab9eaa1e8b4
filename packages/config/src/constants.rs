// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of the environment variable names read by Syntera agent services

// Supabase Connection
pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

// HTTP Transport
pub const SUPABASE_REQUEST_TIMEOUT_SECS: &str = "SUPABASE_REQUEST_TIMEOUT_SECS";
pub const SUPABASE_CONNECT_TIMEOUT_SECS: &str = "SUPABASE_CONNECT_TIMEOUT_SECS";

// Agent Config Normalization
pub const AGENT_CONFIG_STRICT_DEFAULTS: &str = "AGENT_CONFIG_STRICT_DEFAULTS";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

/// Default request timeout for Supabase calls
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout for Supabase calls
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
