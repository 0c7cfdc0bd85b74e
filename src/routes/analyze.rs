use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt as _;
use std::sync::Arc;

use crate::core::{score_rows, Scorer};
use crate::models::{AnalyzeRequest, BatchResponse, ErrorResponse, HealthResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<Scorer>,
}

/// Configure all analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/analyze", web::post().to(analyze_text))
        .route("/analyze_csv", web::post().to(analyze_csv));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Single-text analysis endpoint
///
/// POST /analyze
///
/// Form field: `text` (required). Returns the scored result as one JSON
/// object: `{text, label, confidence, scores}`.
async fn analyze_text(
    state: web::Data<AppState>,
    form: web::Form<AnalyzeRequest>,
) -> impl Responder {
    tracing::debug!("Scoring single text ({} bytes)", form.text.len());

    let result = state.scorer.score(&form.text);

    tracing::info!(
        "Scored text: label={}, confidence={:.4}",
        result.label.as_str(),
        result.confidence
    );

    HttpResponse::Ok().json(result)
}

/// CSV batch analysis endpoint
///
/// POST /analyze_csv
///
/// Multipart upload with a `file` field holding a CSV that has a `text`
/// header column. Returns `{results: [...]}` in input row order, or a
/// structured `{error: ...}` with status 400 when the upload is missing,
/// lacks the column, or cannot be parsed.
async fn analyze_csv(state: web::Data<AppState>, mut payload: Multipart) -> impl Responder {
    let mut data = web::BytesMut::new();
    let mut file_seen = false;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                tracing::info!("Rejecting malformed multipart payload: {}", e);
                return HttpResponse::BadRequest().json(ErrorResponse {
                    error: "Invalid multipart upload.".to_string(),
                });
            }
        };

        if field.name() != "file" {
            continue;
        }
        file_seen = true;

        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) => data.extend_from_slice(&bytes),
                Err(e) => {
                    tracing::info!("Upload aborted mid-stream: {}", e);
                    return HttpResponse::BadRequest().json(ErrorResponse {
                        error: "Invalid multipart upload.".to_string(),
                    });
                }
            }
        }
    }

    if !file_seen {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Missing 'file' upload field.".to_string(),
        });
    }

    match score_rows(&state.scorer, &data) {
        Ok(results) => {
            tracing::info!("Scored {} CSV rows", results.len());
            HttpResponse::Ok().json(BatchResponse { results })
        }
        Err(e) => {
            tracing::info!("Rejecting CSV upload: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}
