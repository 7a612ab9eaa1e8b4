// ABOUTME: Agent configuration types
// ABOUTME: Raw agent_configs rows and the normalized, fully defaulted AgentConfig built from them

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

pub const DEFAULT_NAME: &str = "AI Assistant";
pub const DEFAULT_DESCRIPTION: &str = "";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// How stored values are replaced by defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultingPolicy {
    /// Null, absent, zero and empty values all fall back to the default.
    /// A stored temperature of `0` therefore comes back as `0.7`.
    #[default]
    Falsy,
    /// Only null or absent values fall back to the default.
    Strict,
}

impl DefaultingPolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Falsy
        }
    }
}

/// A row of the `agent_configs` table as stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfigRow {
    pub id: String,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub voice_settings: Option<Value>,
}

/// Normalized agent configuration. Every field except `company_id` is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub agent_id: String,
    pub company_id: Option<String>,
    pub name: String,
    pub description: String,
    pub model: String,
    pub system_prompt: String,
    pub temperature: f64,
    pub voice_settings: Map<String, Value>,
}

impl AgentConfig {
    /// A configuration with every optional field at its default
    pub fn default_for(agent_id: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            company_id: None,
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            voice_settings: Map::new(),
        }
    }

    /// Apply defaults to each field of `row` independently
    pub fn from_row(row: AgentConfigRow, policy: DefaultingPolicy) -> Self {
        let voice_settings = voice_settings_or_default(&row.id, row.voice_settings);

        Self {
            company_id: row.company_id,
            name: text_or(row.name, DEFAULT_NAME, policy),
            description: text_or(row.description, DEFAULT_DESCRIPTION, policy),
            model: text_or(row.model, DEFAULT_MODEL, policy),
            system_prompt: text_or(row.system_prompt, DEFAULT_SYSTEM_PROMPT, policy),
            temperature: temperature_or_default(row.temperature, policy),
            voice_settings,
            agent_id: row.id,
        }
    }
}

fn text_or(value: Option<String>, default: &str, policy: DefaultingPolicy) -> String {
    match (value, policy) {
        (Some(text), DefaultingPolicy::Strict) => text,
        (Some(text), DefaultingPolicy::Falsy) if !text.is_empty() => text,
        _ => default.to_string(),
    }
}

fn temperature_or_default(value: Option<f64>, policy: DefaultingPolicy) -> f64 {
    match (value, policy) {
        (Some(t), DefaultingPolicy::Strict) => t,
        (Some(t), DefaultingPolicy::Falsy) if t != 0.0 => t,
        _ => DEFAULT_TEMPERATURE,
    }
}

// Only a JSON object can be a mapping; anything else collapses to an empty one.
fn voice_settings_or_default(agent_id: &str, value: Option<Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(map)) => map,
        None | Some(Value::Null) => Map::new(),
        Some(other) => {
            if is_truthy(&other) {
                warn!(
                    agent_id,
                    value = %other,
                    "voice_settings is not an object, using empty settings"
                );
            }
            Map::new()
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
