use chatshim_core::responses::{GenerateRequest, GenerateResult};

use crate::adapter::generate_with;
use crate::backend::ChatBackend;
use crate::config::AdapterConfig;
use crate::error::Result;

/// Borrowed `responses` namespace over a chat backend
pub struct Responses<'a, B: ?Sized> {
    backend: &'a B,
    config: AdapterConfig,
}

impl<'a, B: ChatBackend + ?Sized> Responses<'a, B> {
    /// Create a namespace with the default configuration
    pub fn new(backend: &'a B) -> Self {
        Self {
            backend,
            config: AdapterConfig::default(),
        }
    }

    /// Use a custom adapter configuration
    pub fn with_config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    /// Create a response by running a chat completion
    pub async fn create(&self, request: GenerateRequest) -> Result<GenerateResult> {
        generate_with(self.backend, request, &self.config).await
    }
}

/// Adds `responses()` to every chat backend
pub trait ResponsesExt: ChatBackend {
    fn responses(&self) -> Responses<'_, Self> {
        Responses::new(self)
    }
}

impl<B: ChatBackend + ?Sized> ResponsesExt for B {}
