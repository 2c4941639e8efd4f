//! Report text generation using AI

use crate::clients::OpenAIClient;
use crate::config::{OpenAIConfig, ReportMode};
use crate::constants::CANNED_REPORT;
use crate::error::Result;
use crate::services::prompt::build_prompt;
use report_types::ValidatedRequest;
use std::time::Duration;

enum ReportSource {
    Live(OpenAIClient),
    Canned,
}

pub struct ReportWriter {
    source: ReportSource,
}

impl ReportWriter {
    pub fn new(mode: ReportMode, config: OpenAIConfig, timeout: Duration) -> Result<Self> {
        let source = match mode {
            ReportMode::Live => ReportSource::Live(OpenAIClient::new(config, timeout)?),
            ReportMode::Canned => ReportSource::Canned,
        };

        Ok(Self { source })
    }

    /// Writer that always returns the sample report
    pub fn canned() -> Self {
        Self {
            source: ReportSource::Canned,
        }
    }

    pub fn mode(&self) -> ReportMode {
        match self.source {
            ReportSource::Live(_) => ReportMode::Live,
            ReportSource::Canned => ReportMode::Canned,
        }
    }

    /// Produce the report text for a validated request
    pub async fn write_report(&self, request: &ValidatedRequest) -> Result<String> {
        match &self.source {
            ReportSource::Live(client) => {
                let prompt = build_prompt(request);
                client.complete(&prompt).await
            }
            ReportSource::Canned => {
                log::debug!("Serving canned report ({} answers ignored)", request.answers.len());
                Ok(CANNED_REPORT.to_string())
            }
        }
    }
}
