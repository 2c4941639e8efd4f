//! Formspree relay client for delivering error notices by email

use crate::config::RelayConfig;
use crate::error::{ReportError, Result};
use report_types::ErrorNotice;
use reqwest::Client as HttpClient;
use std::time::Duration;

pub struct FormRelayClient {
    endpoint: String,
    http_client: HttpClient,
}

impl FormRelayClient {
    pub fn new(config: RelayConfig, timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        let endpoint = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.form_id.trim_start_matches('/')
        );

        Ok(Self {
            endpoint,
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post an error notice to the relay form
    pub async fn send_notice(&self, notice: &ErrorNotice) -> Result<()> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(notice)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ReportError::ServiceUnavailable(format!(
                "Form relay returned {} - {}",
                status, error_text
            )));
        }

        log::info!("Error notice delivered to form relay");
        Ok(())
    }
}
