//! Request pipeline: validate, generate, render, notify on failure

pub mod orchestrator;
pub mod traits;

pub use orchestrator::{ReportOrchestrator, ReportOutcome};
pub use traits::ReportSteps;
