//! Configuration management for the report service

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub openai: OpenAIConfig,
    pub pdf_service: PdfServiceConfig,
    pub relay: RelayConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_openai_model")]
    pub model: String,

    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_openai_model(),
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfServiceConfig {
    pub api_key: String,

    #[serde(alias = "url", default = "default_pdf_base_url")]
    pub base_url: String,
}

/// Form relay used for error notices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(alias = "email")] // Formspree addresses forms by email or form id
    pub form_id: String,

    #[serde(alias = "url", default = "default_relay_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origin: default_allowed_origin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default)]
    pub mode: ReportMode,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            mode: ReportMode::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// How report text is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Call the text-generation API for every request
    #[default]
    Live,
    /// Serve the built-in sample report without calling the API
    Canned,
}

impl FromStr for ReportMode {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(ReportMode::Live),
            "canned" => Ok(ReportMode::Canned),
            other => Err(ReportError::Config(format!(
                "Unknown report mode '{}' (expected 'live' or 'canned')",
                other
            ))),
        }
    }
}

// Default functions
fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_pdf_base_url() -> String {
    "https://api.pdf.co".to_string()
}

fn default_relay_base_url() -> String {
    "https://formspree.io".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_allowed_origin() -> String {
    "https://dmotts.github.io".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl ReportConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ReportError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ReportConfig = serde_json::from_str(json)
            .map_err(|e| ReportError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable source (environment, test map, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| ReportError::Config(format!("Invalid PORT value '{}'", port)))?,
            None => default_port(),
        };

        let timeout_secs = match var("HTTP_TIMEOUT_SECS") {
            Some(secs) => secs.parse::<u64>().map_err(|_| {
                ReportError::Config(format!("Invalid HTTP_TIMEOUT_SECS value '{}'", secs))
            })?,
            None => default_timeout_secs(),
        };

        let mode = match var("REPORT_MODE") {
            Some(mode) => mode.parse::<ReportMode>()?,
            None => ReportMode::default(),
        };

        let config = Self {
            openai: OpenAIConfig {
                api_key: var("OPENAI_API_KEY").unwrap_or_default(),
                model: var("OPENAI_MODEL").unwrap_or_else(default_openai_model),
                base_url: var("OPENAI_BASE_URL"),
            },
            pdf_service: PdfServiceConfig {
                api_key: var("PDFCO_API_KEY").unwrap_or_default(),
                base_url: var("PDFCO_BASE_URL").unwrap_or_else(default_pdf_base_url),
            },
            relay: RelayConfig {
                form_id: var("FORMSPREE_EMAIL").unwrap_or_default(),
                base_url: var("FORMSPREE_BASE_URL").unwrap_or_else(default_relay_base_url),
            },
            server: ServerConfig {
                host: var("HOST").unwrap_or_else(default_host),
                port,
                allowed_origin: var("ALLOWED_ORIGIN").unwrap_or_else(default_allowed_origin),
            },
            report: ReportSettings { mode, timeout_secs },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.pdf_service.api_key.is_empty() {
            return Err(ReportError::Config("PDF.co API key is required".to_string()));
        }

        if self.relay.form_id.is_empty() {
            return Err(ReportError::Config(
                "Formspree form id (or email) is required".to_string(),
            ));
        }

        // Canned reports never reach the text-generation API
        if self.report.mode == ReportMode::Live && self.openai.api_key.is_empty() {
            return Err(ReportError::Config(
                "OpenAI API key is required in live mode".to_string(),
            ));
        }

        Ok(())
    }
}
