use serde::{Deserialize, Serialize};

use crate::error::{LLMError, Result};

/// Rule for deciding whether an optional request field is forwarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Forward only truthy values: `0`, `false`, empty lists, strings and
    /// maps are dropped. Matches the behavior of existing responses shims.
    #[default]
    Truthy,
    /// Forward every value the caller set, including zero and `false`
    Provided,
}

/// Adapter configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// How optional fields are filtered before dispatch
    pub field_policy: FieldPolicy,
    /// System instructions used when a request carries none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_instructions: Option<String>,
}

impl AdapterConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LLMError::Config(e.to_string()))
    }

    /// Set the field policy
    pub fn with_field_policy(mut self, policy: FieldPolicy) -> Self {
        self.field_policy = policy;
        self
    }

    /// Set default system instructions
    pub fn with_default_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.default_instructions = Some(instructions.into());
        self
    }
}
