use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

use crate::types::ReasoningEffort;

/// Chat completion request
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Value>,
    pub options: ChatOptions,
    /// Pass-through parameters, merged over everything else
    pub extra: Map<String, Value>,
}

impl ChatRequest {
    /// Create a new chat request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            options: ChatOptions::default(),
            extra: Map::new(),
        }
    }

    /// Add a message record to the request
    pub fn with_message(mut self, message: Value) -> Self {
        self.messages.push(message);
        self
    }

    /// Add multiple message records
    pub fn with_messages(mut self, messages: Vec<Value>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Set options
    pub fn with_options(mut self, options: ChatOptions) -> Self {
        self.options = options;
        self
    }

    /// Overlay pass-through parameters.
    ///
    /// Keys naming a typed option replace that option, so `options` and
    /// `to_params()` always agree. A value that does not fit the typed field
    /// clears the option and stays in `extra` to be sent as given. Call this
    /// after `with_options`.
    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        for (key, value) in extra {
            let rejected = match key.as_str() {
                "temperature" => absorb(value, &mut self.options.temperature),
                "top_p" => absorb(value, &mut self.options.top_p),
                "max_tokens" => absorb(value, &mut self.options.max_tokens),
                "modalities" => absorb(value, &mut self.options.modalities),
                "store" => absorb(value, &mut self.options.store),
                "reasoning_effort" => absorb(value, &mut self.options.reasoning_effort),
                "metadata" => absorb(value, &mut self.options.metadata),
                _ => Some(value),
            };
            match rejected {
                Some(value) => {
                    self.extra.insert(key, value);
                }
                None => {
                    self.extra.remove(&key);
                }
            }
        }
        self
    }

    /// Wire parameters for a chat completion call.
    ///
    /// Mapped fields are written first, then `extra` is laid over them, so a
    /// pass-through key replaces a mapped field of the same name.
    pub fn to_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("model".to_string(), json!(self.model));
        params.insert("messages".to_string(), json!(self.messages));

        let options = &self.options;
        if let Some(temp) = options.temperature {
            params.insert("temperature".to_string(), json!(temp));
        }
        if let Some(top_p) = options.top_p {
            params.insert("top_p".to_string(), json!(top_p));
        }
        if let Some(max_tokens) = options.max_tokens {
            params.insert("max_tokens".to_string(), json!(max_tokens));
        }
        if let Some(modalities) = &options.modalities {
            params.insert("modalities".to_string(), json!(modalities));
        }
        if let Some(store) = options.store {
            params.insert("store".to_string(), json!(store));
        }
        if let Some(effort) = &options.reasoning_effort {
            params.insert("reasoning_effort".to_string(), json!(effort.as_str()));
        }
        if let Some(metadata) = &options.metadata {
            params.insert("metadata".to_string(), Value::Object(metadata.clone()));
        }

        for (key, value) in &self.extra {
            params.insert(key.clone(), value.clone());
        }

        params
    }

    /// Look up a single merged wire parameter
    pub fn param(&self, key: &str) -> Option<Value> {
        self.to_params().remove(key)
    }
}

/// Move `value` into a typed option slot, or hand it back if it does not fit
fn absorb<T: DeserializeOwned>(value: Value, slot: &mut Option<T>) -> Option<Value> {
    match serde_json::from_value::<T>(value.clone()) {
        Ok(typed) => {
            *slot = Some(typed);
            None
        }
        Err(_) => {
            *slot = None;
            Some(value)
        }
    }
}

impl Serialize for ChatRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_params().serialize(serializer)
    }
}

/// Optional sampling and bookkeeping options for a chat completion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatOptions {
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub max_tokens: Option<u32>,
    pub modalities: Option<Vec<String>>,
    pub store: Option<bool>,
    pub reasoning_effort: Option<ReasoningEffort>,
    pub metadata: Option<Map<String, Value>>,
}

impl ChatOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set temperature (0.0 - 2.0)
    pub fn with_temperature(mut self, temp: f64) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set top_p (0.0 - 1.0)
    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Names of the options that are set
    pub fn set_fields(&self) -> Vec<&'static str> {
        [
            ("temperature", self.temperature.is_some()),
            ("top_p", self.top_p.is_some()),
            ("max_tokens", self.max_tokens.is_some()),
            ("modalities", self.modalities.is_some()),
            ("store", self.store.is_some()),
            ("reasoning_effort", self.reasoning_effort.is_some()),
            ("metadata", self.metadata.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}
