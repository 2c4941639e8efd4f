//! OpenAI chat-completions client used to write report text

use crate::config::OpenAIConfig;
use crate::constants::DEFAULT_OPENAI_BASE_URL;
use crate::error::{ReportError, Result};
use reqwest::Client as HttpClient;
use serde_json::json;
use std::time::Duration;

pub struct OpenAIClient {
    config: OpenAIConfig,
    http_client: HttpClient,
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig, timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn completions_url(&self) -> String {
        let base = self
            .config
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_OPENAI_BASE_URL);
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }

    /// Send a single user prompt and return the first choice's text
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let url = self.completions_url();

        log::debug!(
            "Requesting completion from {} (model {}, prompt {} chars)",
            url,
            self.config.model,
            prompt.len()
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&json!({
                "model": self.config.model,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt
                    }
                ]
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ReportError::ServiceUnavailable(format!(
                "OpenAI API returned {} - {}",
                status, error_text
            )));
        }

        let result: serde_json::Value = response.json().await?;

        let content = result["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| ReportError::Processing("No content in OpenAI response".to_string()))?;

        log::debug!("Received completion ({} chars)", content.len());
        Ok(content.to_string())
    }
}
