use crate::{error::AppError, server::AppState};
use actix_web::{post, web, HttpResponse};
use analyst_core::AnalysisRequest;

/// Analyze a batch of nonconformance records.
///
/// An empty batch short-circuits to the stable baseline result; anything
/// else is delegated to the configured completion backend.
#[post("/analise-rnc")]
pub async fn analyze_batch(
    app_state: web::Data<AppState>,
    payload: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, AppError> {
    let result = app_state.analysis_service.analyze(&payload).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze_batch);
}
