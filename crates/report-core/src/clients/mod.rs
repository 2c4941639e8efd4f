//! Client modules for external services

pub mod openai;
pub mod pdf;
pub mod relay;

// Re-export all client types
pub use openai::OpenAIClient;
pub use pdf::PDFService;
pub use relay::FormRelayClient;
