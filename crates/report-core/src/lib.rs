//! Insights Report Core Library
//!
//! Business logic for the insights report service: configuration, clients for
//! the text-generation, PDF and relay APIs, and the request pipeline.

pub mod clients;
pub mod config;
pub mod constants;
pub mod error;
pub mod pipeline;
pub mod services;

// Re-export main types for easy access
pub use config::{ReportConfig, ReportMode};
pub use error::{ReportError, Result};

// Re-export all client types
pub use clients::{FormRelayClient, OpenAIClient, PDFService};

// Re-export service types
pub use services::{ReportProcessor, ReportWriter};

// Re-export pipeline types
pub use pipeline::{ReportOrchestrator, ReportOutcome, ReportSteps};
