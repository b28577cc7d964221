use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, web, App, HttpRequest, HttpServer};
use analyst_core::Config;
use analyst_llm::create_provider;
use log::{error, info};

use crate::controllers::analysis_controller;
use crate::error::AppError;
use crate::services::AnalysisService;

pub struct AppState {
    pub analysis_service: AnalysisService,
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .configure(analysis_controller::config);
}

/// Route body-deserialization failures through the shared error shape, so a
/// record missing a required field yields a 400 naming that field.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            AppError::InvalidInput(err.to_string()).into()
        })
}

pub async fn run(port: u16) -> Result<(), String> {
    info!("Starting analysis service...");

    let config = Config::new();
    let provider = create_provider(&config)
        .map_err(|e| format!("Failed to create completion provider: {e}"))?;

    let app_state = web::Data::new(AppState {
        analysis_service: AnalysisService::new(provider),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("0.0.0.0:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Analysis service listening on http://0.0.0.0:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
