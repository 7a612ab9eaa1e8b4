//! Supabase client for Syntera agent services
//!
//! Thin wrapper over the PostgREST endpoint of a Supabase project: single-row
//! lookups, table reachability checks, and a construct-once client provider.

pub mod client;
pub mod error;
pub mod provider;

pub use client::{PostgrestErrorBody, SupabaseClient};
pub use error::{SupabaseError, SupabaseResult};
pub use provider::ClientProvider;
