//! Shared wire types for the insights report service

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Questionnaire answers keyed by question
pub type Answers = serde_json::Map<String, Value>;

/// User-facing message returned with every 500 response
pub const FALLBACK_MESSAGE: &str =
    "There was an issue generating your report. We are looking into it.";

/// Follow-up text returned with every 500 response
pub const FALLBACK_NOTICE: &str = "You will receive your business A.I. insights report shortly. Please contact us if you have any questions.";

/// Subject line of every error notice sent to the relay
pub const NOTICE_SUBJECT: &str = "A.I. API is down - Business A.I. Insights Report";

const NOTICE_PREFIX: &str = "An error occurred in the A.I. report generation API";

/// Body of `POST /generate-report` as submitted by the questionnaire page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub answers: Option<Value>,

    #[serde(rename = "additionalInfo", default)]
    pub additional_info: Option<Value>,
}

impl ReportRequest {
    /// Check that answers are present and normalise the optional fields
    pub fn validate(self) -> Result<ValidatedRequest, ValidationError> {
        let answers = match self.answers {
            Some(Value::Object(map)) if !map.is_empty() => map,
            _ => return Err(ValidationError::MissingAnswers),
        };

        let additional_info = match self.additional_info {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(other) => Some(other.to_string()),
        };

        Ok(ValidatedRequest {
            answers,
            additional_info,
        })
    }
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub answers: Answers,
    pub additional_info: Option<String>,
}

/// Client-side request problems, answered with 400
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing answers")]
    MissingAnswers,
}

/// Success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadResponse {
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

/// Body of a 400 response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&ValidationError> for ErrorBody {
    fn from(error: &ValidationError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Body of a 500 response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FallbackResponse {
    pub message: String,
    pub fallback: String,
}

impl FallbackResponse {
    pub fn standard() -> Self {
        Self {
            message: FALLBACK_MESSAGE.to_string(),
            fallback: FALLBACK_NOTICE.to_string(),
        }
    }
}

/// Payload posted to the form relay when a request fails
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorNotice {
    pub subject: String,
    pub message: String,
}

impl ErrorNotice {
    pub fn for_failure(error: &dyn std::fmt::Display) -> Self {
        Self {
            subject: NOTICE_SUBJECT.to_string(),
            message: format!("{}: {}", NOTICE_PREFIX, error),
        }
    }
}
