// ABOUTME: Configuration for Syntera agent services
// ABOUTME: Environment variable names and the Supabase connection settings parsed from them

pub mod constants;
pub mod settings;

pub use settings::{ConfigError, SupabaseSettings};
