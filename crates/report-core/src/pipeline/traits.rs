//! Pipeline step trait for the report orchestrator

use crate::error::Result;
use async_trait::async_trait;
use report_types::{ErrorNotice, ValidatedRequest};

/// External collaborators of a report request
#[async_trait]
pub trait ReportSteps: Send + Sync {
    /// Step 1: Produce report text for the submitted answers
    async fn generate_report(&self, request: &ValidatedRequest) -> Result<String>;

    /// Step 2: Render report text to a PDF and return its download URL
    async fn render_pdf(&self, report_text: &str) -> Result<String>;

    /// Deliver an error notice to the relay
    async fn send_error_notice(&self, notice: &ErrorNotice) -> Result<()>;
}
