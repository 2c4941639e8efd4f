//! Report processing service wiring the pipeline steps to real clients

use crate::clients::{FormRelayClient, PDFService};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::pipeline::ReportSteps;
use crate::services::html::render_document;
use crate::services::ReportWriter;
use async_trait::async_trait;
use chrono::Utc;
use report_types::{ErrorNotice, ValidatedRequest};
use std::time::Duration;

pub struct ReportProcessor {
    writer: ReportWriter,
    pdf_service: PDFService,
    relay_client: FormRelayClient,
}

impl ReportProcessor {
    pub fn new(writer: ReportWriter, pdf_service: PDFService, relay_client: FormRelayClient) -> Self {
        Self {
            writer,
            pdf_service,
            relay_client,
        }
    }

    /// Build all clients from configuration
    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.report.timeout_secs);

        let writer = ReportWriter::new(config.report.mode, config.openai.clone(), timeout)?;
        let pdf_service = PDFService::new(config.pdf_service.clone(), timeout)?;
        let relay_client = FormRelayClient::new(config.relay.clone(), timeout)?;

        log::info!(
            "Report processor ready (mode {:?}, relay {})",
            writer.mode(),
            relay_client.endpoint()
        );

        Ok(Self::new(writer, pdf_service, relay_client))
    }
}

#[async_trait]
impl ReportSteps for ReportProcessor {
    async fn generate_report(&self, request: &ValidatedRequest) -> Result<String> {
        self.writer.write_report(request).await
    }

    async fn render_pdf(&self, report_text: &str) -> Result<String> {
        let html = render_document(report_text, Utc::now());
        self.pdf_service.convert_html(&html).await
    }

    async fn send_error_notice(&self, notice: &ErrorNotice) -> Result<()> {
        self.relay_client.send_notice(notice).await
    }
}
