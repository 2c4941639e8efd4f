//! Report orchestrator with strongly-typed steps

use super::traits::ReportSteps;
use crate::error::{ReportError, Result};
use report_types::{ErrorNotice, ReportRequest, ValidatedRequest, ValidationError};

/// Result of processing one report request
#[derive(Debug)]
pub enum ReportOutcome {
    /// The PDF is ready at `download_url`
    Delivered { download_url: String },
    /// The request was refused before any external call
    Rejected(ValidationError),
    /// A step failed; the relay has been notified
    Failed(ReportError),
}

/// Single orchestration component with hard-coded pipeline steps
pub struct ReportOrchestrator<T: ReportSteps> {
    steps: T,
}

impl<T: ReportSteps> ReportOrchestrator<T> {
    pub fn new(steps: T) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &T {
        &self.steps
    }

    /// Process a raw request body through validation, generation and rendering
    pub async fn process(&self, request_id: &str, body: &[u8]) -> ReportOutcome {
        let request: ReportRequest = match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(e) => return self.handle_failure(request_id, e.into()).await,
        };

        let validated = match request.validate() {
            Ok(validated) => validated,
            Err(e) => {
                log::warn!("[{}] Rejected report request: {}", request_id, e);
                return ReportOutcome::Rejected(e);
            }
        };

        match self.run_steps(request_id, &validated).await {
            Ok(download_url) => {
                log::info!("[{}] Report ready at {}", request_id, download_url);
                ReportOutcome::Delivered { download_url }
            }
            Err(e) => self.handle_failure(request_id, e).await,
        }
    }

    async fn run_steps(&self, request_id: &str, request: &ValidatedRequest) -> Result<String> {
        log::info!(
            "[{}] Generating report for {} answers",
            request_id,
            request.answers.len()
        );

        let report_text = self.steps.generate_report(request).await?;
        log::info!("[{}] Step 1: Generated report text ({} chars)", request_id, report_text.len());

        let download_url = self.steps.render_pdf(&report_text).await?;
        log::info!("[{}] Step 2: Rendered PDF", request_id);

        Ok(download_url)
    }

    /// Log the failure and report it to the relay; relay errors are only logged
    async fn handle_failure(&self, request_id: &str, error: ReportError) -> ReportOutcome {
        log::error!("[{}] Error generating report: {}", request_id, error);

        let notice = ErrorNotice::for_failure(&error);
        if let Err(notify_err) = self.steps.send_error_notice(&notice).await {
            log::error!("[{}] Failed to send error notice: {}", request_id, notify_err);
        }

        ReportOutcome::Failed(error)
    }
}
