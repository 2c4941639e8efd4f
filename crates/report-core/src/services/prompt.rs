//! Prompt construction for report generation

use crate::constants::NO_ADDITIONAL_INFO;
use report_types::{Answers, ValidatedRequest};
use serde_json::Value;

/// Build the text-generation prompt for a validated request
pub fn build_prompt(request: &ValidatedRequest) -> String {
    let additional_info = request
        .additional_info
        .as_deref()
        .unwrap_or(NO_ADDITIONAL_INFO);

    format!(
        "Generate a business A.I. insights report based on the following answers: {}. \
        Additional information: {}. Include actionable insights and potential strategies.",
        render_answers(&request.answers),
        additional_info
    )
}

/// Render answers as `question: answer` pairs in key order
pub fn render_answers(answers: &Answers) -> String {
    answers
        .iter()
        .map(|(question, answer)| format!("{}: {}", question, answer_text(answer)))
        .collect::<Vec<_>>()
        .join("; ")
}

fn answer_text(answer: &Value) -> String {
    match answer {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
