use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{GuideRequest, LlmProvider};
use crate::llm::prompts::build_guide_prompt;
use crate::GuideError;

const DEFAULT_HF_ENDPOINT: &str = "https://api-inference.huggingface.co";
const DEFAULT_HF_MODEL: &str = "gpt2";

// Fixed sampling parameters; the output contract lives in the prompt.
const MAX_NEW_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;

pub struct HuggingFaceClient {
    http: Client,
    api_token: String,
    model: String,
    endpoint: String,
}

impl HuggingFaceClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_token = settings.llm.api_token.trim().to_string();
        if api_token.is_empty() {
            anyhow::bail!(
                "Hugging Face API token is missing. Set llm.api_token in config or VIDGUIDE_HF_API_TOKEN."
            );
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_HF_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_HF_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .context("Failed to build Hugging Face HTTP client")?,
            api_token,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}", self.endpoint, self.model)
    }
}

#[async_trait]
impl LlmProvider for HuggingFaceClient {
    async fn generate(&self, request: GuideRequest<'_>) -> crate::Result<String> {
        let prompt = build_guide_prompt(request.title, request.transcript);

        let body = TextGenerationRequest {
            inputs: prompt,
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                top_p: TOP_P,
                return_full_text: false,
            },
        };

        // Single attempt: quota and transport failures are terminal for the
        // request.
        let response = match self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(model = %self.model, error = %err, "Text generation request failed");
                return Err(GuideError::GenerationFailed);
            }
        };

        let payload: Vec<GeneratedText> = match response.json().await {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!(model = %self.model, error = %err, "Failed to decode text generation response");
                return Err(GuideError::GenerationFailed);
            }
        };

        let output = payload
            .iter()
            .map(|g| g.generated_text.trim())
            .find(|t| !t.is_empty())
            .map(str::to_string);

        match output {
            Some(text) => Ok(text),
            None => {
                tracing::warn!(model = %self.model, "Text generation response contained no output");
                Err(GuideError::GenerationFailed)
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct TextGenerationRequest {
    inputs: String,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}
