//! PDF.co HTML-to-PDF conversion client

use crate::config::PdfServiceConfig;
use crate::constants::PDF_FILE_NAME;
use crate::error::{ReportError, Result};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const CONVERT_PATH: &str = "/v1/pdf/convert/from/html";

/// Subset of the conversion response the service relies on
#[derive(Debug, Deserialize)]
struct ConversionResponse {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

pub struct PDFService {
    config: PdfServiceConfig,
    http_client: HttpClient,
}

impl PDFService {
    pub fn new(config: PdfServiceConfig, timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn convert_url(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), CONVERT_PATH)
    }

    /// Convert an HTML document and return the hosted download URL
    pub async fn convert_html(&self, html: &str) -> Result<String> {
        let url = self.convert_url();

        log::debug!("Creating PDF from {} bytes of HTML via {}", html.len(), url);

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .json(&json!({
                "html": html,
                "name": PDF_FILE_NAME
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
                "PDF service returned {} - {}",
                status, error_text
            )));
        }

        let result: ConversionResponse = response.json().await?;
        log::debug!("Received PDF service response: {:?}", result);

        Self::download_url(result)
    }

    fn download_url(result: ConversionResponse) -> Result<String> {
        if result.error {
            return Err(ReportError::PdfGeneration(
                result
                    .message
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }

        result
            .url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ReportError::PdfGeneration("response did not include a URL".to_string()))
    }
}
