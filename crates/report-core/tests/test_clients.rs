//! Client tests against an in-process fake of the upstream APIs

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use report_core::clients::{FormRelayClient, OpenAIClient, PDFService};
use report_core::config::{OpenAIConfig, PdfServiceConfig, RelayConfig, ReportMode};
use report_core::pipeline::{ReportOrchestrator, ReportOutcome};
use report_core::services::ReportWriter;
use report_core::{ReportError, ReportProcessor};
use report_types::ErrorNotice;
use serde_json::{json, Value};
use std::sync::Mutex;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

/// Requests captured by the fake upstream
#[derive(Default)]
struct Captured {
    prompts: Mutex<Vec<String>>,
    html: Mutex<Vec<String>>,
    notices: Mutex<Vec<Value>>,
}

async fn chat_completions(
    req: HttpRequest,
    body: web::Json<Value>,
    captured: web::Data<Captured>,
) -> HttpResponse {
    let authorized = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer sk-test");
    if !authorized {
        return HttpResponse::Unauthorized().json(json!({"error": {"message": "bad key"}}));
    }

    let prompt = body["messages"][0]["content"].as_str().unwrap_or_default().to_string();
    captured.prompts.lock().unwrap().push(prompt);

    if body["model"] == "empty-model" {
        return HttpResponse::Ok().json(json!({"choices": []}));
    }

    HttpResponse::Ok().json(json!({
        "choices": [
            {"message": {"role": "assistant", "content": "# Insights\n\n1. **Automate** support"}}
        ]
    }))
}

async fn convert_html(
    req: HttpRequest,
    body: web::Json<Value>,
    captured: web::Data<Captured>,
) -> HttpResponse {
    let api_key = req
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    captured
        .html
        .lock()
        .unwrap()
        .push(body["html"].as_str().unwrap_or_default().to_string());

    match api_key.as_str() {
        "pdf-key" => HttpResponse::Ok().json(json!({
            "url": "https://files.example/report.pdf",
            "error": false,
            "status": 200,
            "name": body["name"]
        })),
        "no-credits" => HttpResponse::Ok().json(json!({
            "error": true,
            "status": 402,
            "message": "Not enough credits"
        })),
        _ => HttpResponse::ServiceUnavailable().body("maintenance"),
    }
}

async fn relay_form(
    path: web::Path<String>,
    body: web::Json<Value>,
    captured: web::Data<Captured>,
) -> HttpResponse {
    if path.as_str() == "broken" {
        return HttpResponse::InternalServerError().finish();
    }
    captured.notices.lock().unwrap().push(body.into_inner());
    HttpResponse::Ok().json(json!({"ok": true}))
}

/// Start the fake upstream and return its base URL
fn start_upstream(captured: web::Data<Captured>) -> String {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(captured.clone())
            .route("/v1/chat/completions", web::post().to(chat_completions))
            .route("/v1/pdf/convert/from/html", web::post().to(convert_html))
            .route("/f/{form_id}", web::post().to(relay_form))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind fake upstream");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

fn openai_config(base: &str, model: &str) -> OpenAIConfig {
    OpenAIConfig {
        api_key: "sk-test".to_string(),
        model: model.to_string(),
        base_url: Some(format!("{}/v1", base)),
    }
}

fn pdf_service(base: &str, api_key: &str) -> PDFService {
    PDFService::new(
        PdfServiceConfig {
            api_key: api_key.to_string(),
            base_url: base.to_string(),
        },
        TIMEOUT,
    )
    .unwrap()
}

fn relay_client(base: &str, form_id: &str) -> FormRelayClient {
    FormRelayClient::new(
        RelayConfig {
            form_id: form_id.to_string(),
            base_url: format!("{}/f", base),
        },
        TIMEOUT,
    )
    .unwrap()
}

#[actix_web::test]
async fn test_openai_completion_returns_first_choice() {
    let captured = web::Data::new(Captured::default());
    let base = start_upstream(captured.clone());

    let client = OpenAIClient::new(openai_config(&base, "gpt-4o-mini"), TIMEOUT).unwrap();
    let text = client.complete("Summarise my answers").await.unwrap();

    assert_eq!(text, "# Insights\n\n1. **Automate** support");
    assert_eq!(captured.prompts.lock().unwrap().as_slice(), ["Summarise my answers"]);
}

#[actix_web::test]
async fn test_openai_rejected_key_is_service_unavailable() {
    let captured = web::Data::new(Captured::default());
    let base = start_upstream(captured.clone());

    let mut config = openai_config(&base, "gpt-4o-mini");
    config.api_key = "sk-wrong".to_string();
    let client = OpenAIClient::new(config, TIMEOUT).unwrap();

    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, ReportError::ServiceUnavailable(_)));
    assert!(err.to_string().contains("401"), "got: {}", err);
}

#[actix_web::test]
async fn test_openai_without_choices_is_processing_error() {
    let captured = web::Data::new(Captured::default());
    let base = start_upstream(captured.clone());

    let client = OpenAIClient::new(openai_config(&base, "empty-model"), TIMEOUT).unwrap();

    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, ReportError::Processing(_)));
}

#[actix_web::test]
async fn test_pdf_conversion_returns_download_url() {
    let captured = web::Data::new(Captured::default());
    let base = start_upstream(captured.clone());

    let url = pdf_service(&base, "pdf-key")
        .convert_html("<h1>Report</h1>")
        .await
        .unwrap();

    assert_eq!(url, "https://files.example/report.pdf");
    assert_eq!(captured.html.lock().unwrap().as_slice(), ["<h1>Report</h1>"]);
}

#[actix_web::test]
async fn test_pdf_error_field_is_pdf_generation_error() {
    let captured = web::Data::new(Captured::default());
    let base = start_upstream(captured.clone());

    let err = pdf_service(&base, "no-credits")
        .convert_html("<h1>Report</h1>")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "PDF generation error: Not enough credits");
}

#[actix_web::test]
async fn test_pdf_non_success_status() {
    let captured = web::Data::new(Captured::default());
    let base = start_upstream(captured.clone());

    let err = pdf_service(&base, "unknown-key")
        .convert_html("<h1>Report</h1>")
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::ServiceUnavailable(_)));
    assert!(err.to_string().contains("maintenance"), "got: {}", err);
}

#[actix_web::test]
async fn test_relay_posts_subject_and_message() {
    let captured = web::Data::new(Captured::default());
    let base = start_upstream(captured.clone());

    let notice = ErrorNotice::for_failure(&"upstream timed out");
    relay_client(&base, "ops@example.com")
        .send_notice(&notice)
        .await
        .unwrap();

    let notices = captured.notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(
        notices[0]["subject"],
        "A.I. API is down - Business A.I. Insights Report"
    );
    assert_eq!(
        notices[0]["message"],
        "An error occurred in the A.I. report generation API: upstream timed out"
    );
}

#[actix_web::test]
async fn test_relay_failure_is_reported() {
    let captured = web::Data::new(Captured::default());
    let base = start_upstream(captured.clone());

    let result = relay_client(&base, "broken")
        .send_notice(&ErrorNotice::for_failure(&"boom"))
        .await;

    assert!(matches!(result, Err(ReportError::ServiceUnavailable(_))));
}

#[actix_web::test]
async fn test_processor_end_to_end() {
    let captured = web::Data::new(Captured::default());
    let base = start_upstream(captured.clone());

    let writer = ReportWriter::new(
        ReportMode::Live,
        openai_config(&base, "gpt-4o-mini"),
        TIMEOUT,
    )
    .unwrap();
    let processor = ReportProcessor::new(
        writer,
        pdf_service(&base, "pdf-key"),
        relay_client(&base, "ops@example.com"),
    );
    let orchestrator = ReportOrchestrator::new(processor);

    let outcome = orchestrator
        .process(
            "e2e",
            br#"{"answers": {"industry": "retail"}, "additionalInfo": "five staff"}"#,
        )
        .await;

    match outcome {
        ReportOutcome::Delivered { download_url } => {
            assert_eq!(download_url, "https://files.example/report.pdf")
        }
        other => panic!("expected delivery, got {:?}", other),
    }

    let prompts = captured.prompts.lock().unwrap();
    assert!(prompts[0].contains("industry: retail"));
    assert!(prompts[0].contains("Additional information: five staff."));

    let html = captured.html.lock().unwrap();
    assert!(html[0].contains("<h1>Insights</h1>"));
    assert!(html[0].contains("<strong>Automate</strong>"));
    assert!(captured.notices.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn test_processor_failure_sends_one_notice() {
    let captured = web::Data::new(Captured::default());
    let base = start_upstream(captured.clone());

    let processor = ReportProcessor::new(
        ReportWriter::canned(),
        pdf_service(&base, "no-credits"),
        relay_client(&base, "ops@example.com"),
    );
    let orchestrator = ReportOrchestrator::new(processor);

    let outcome = orchestrator
        .process("e2e-fail", br#"{"answers": {"industry": "retail"}}"#)
        .await;

    assert!(matches!(
        outcome,
        ReportOutcome::Failed(ReportError::PdfGeneration(_))
    ));
    assert!(captured.prompts.lock().unwrap().is_empty(), "canned mode never calls OpenAI");

    let notices = captured.notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert!(notices[0]["message"]
        .as_str()
        .unwrap()
        .ends_with("PDF generation error: Not enough credits"));
}
