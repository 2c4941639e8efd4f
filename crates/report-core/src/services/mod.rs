//! Service modules for business logic

pub mod html;
pub mod prompt;
pub mod report_processor;
pub mod report_writer;

// Re-export service types
pub use report_processor::ReportProcessor;
pub use report_writer::ReportWriter;
