//! Route handlers and response headers

use actix_web::http::header::{HeaderValue, InvalidHeaderValue};
use actix_web::http::Method;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpResponse};
use report_core::constants::LIVENESS_MESSAGE;
use report_core::pipeline::{ReportOrchestrator, ReportOutcome, ReportSteps};
use report_types::{DownloadResponse, ErrorBody, FallbackResponse};

pub const GENERATE_REPORT_PATH: &str = "/generate-report";

/// `GET /`
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

/// `POST /generate-report`
pub async fn generate_report<T: ReportSteps + 'static>(
    orchestrator: web::Data<ReportOrchestrator<T>>,
    body: web::Bytes,
) -> HttpResponse {
    let request_id = uuid::Uuid::new_v4().to_string();
    log::info!("[{}] Received report request ({} bytes)", request_id, body.len());

    match orchestrator.process(&request_id, &body).await {
        ReportOutcome::Delivered { download_url } => {
            HttpResponse::Ok().json(DownloadResponse { download_url })
        }
        ReportOutcome::Rejected(e) => HttpResponse::BadRequest().json(ErrorBody::from(&e)),
        ReportOutcome::Failed(_) => {
            HttpResponse::InternalServerError().json(FallbackResponse::standard())
        }
    }
}

/// Browser preflight; the CORS headers come from [`response_headers`]
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Register all routes for an orchestrator over `T`
pub fn config<T: ReportSteps + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(liveness)).service(
        web::resource(GENERATE_REPORT_PATH)
            .route(web::post().to(generate_report::<T>))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}

/// Headers attached to every response, errors included
pub fn response_headers(allowed_origin: &str) -> Result<DefaultHeaders, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin)?;

    Ok(DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", origin))
        .add(("Access-Control-Allow-Methods", "POST"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
        .add(("Content-Security-Policy", "default-src 'self'")))
}
