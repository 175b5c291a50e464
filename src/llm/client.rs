use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::huggingface::HuggingFaceClient;

/// Guide generation request payload.
pub struct GuideRequest<'a> {
    pub title: &'a str,
    pub transcript: &'a str,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run one generation attempt and return the raw model output.
    async fn generate(&self, request: GuideRequest<'_>) -> crate::Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "huggingface" => Ok(Box::new(HuggingFaceClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: huggingface",
            other
        ),
    }
}
