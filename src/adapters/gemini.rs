use crate::core::prompts;
use crate::domain::model::{Prospect, Service, UserProfile};
use crate::domain::ports::LeadGenerator;
use crate::utils::error::{ProspectError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// HTTP adapter for the Gemini generateContent endpoint.
///
/// Only transport lives here; prompt construction is `core::prompts` and
/// payload handling is the caller's. The base URL is injectable so tests can
/// point it at a local mock server.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    async fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let body = serde_json::json!({
            "systemInstruction": { "parts": [{ "text": system_instruction }] },
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        });

        tracing::debug!("📡 Generation request to {}", url);
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let envelope: serde_json::Value = response.json().await?;
        let text = envelope
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ProspectError::schema("generation response carried no candidate text")
            })?;

        Ok(text.to_string())
    }
}

#[async_trait]
impl LeadGenerator for GeminiClient {
    async fn prospect_batch(
        &self,
        service: &Service,
        sector: &str,
        location: &str,
    ) -> Result<String> {
        let prompt = prompts::search_prompt(service, sector, location);
        self.generate(prompts::SEARCH_SYSTEM_INSTRUCTION, &prompt)
            .await
    }

    async fn email_draft(
        &self,
        prospect: &Prospect,
        service: &Service,
        profile: &UserProfile,
    ) -> Result<String> {
        let prompt = prompts::email_prompt(prospect, service, profile);
        self.generate(prompts::EMAIL_SYSTEM_INSTRUCTION, &prompt)
            .await
    }
}
