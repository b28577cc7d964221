use std::env;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting RNC analysis service...");

    // Get port from environment variable or use default
    let port = env::var("APP_PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8000);

    if let Err(e) = web_service::server::run(port).await {
        log::error!("Failed to run analysis service: {}", e);
        std::process::exit(1);
    }
}
