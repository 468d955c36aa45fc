use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_api::{
    constants::START_TIME,
    db::create_store,
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    telemetry::init_tracing,
    web::cors::build_cors,
    AppState,
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::new();

    init_tracing(config.as_ref().is_ok_and(|cfg| cfg.is_production()));
    once_cell::sync::Lazy::force(&START_TIME);

    let config = match config {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let store = create_store(&config).await;

    let app_state = web::Data::new(
        AppState::new(&config, store.clone())
    );

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "🚀 Starting Portfolio API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&server_config))
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .disable_signals()
    .bind(server_addr)?
    .run();

    let handle = server.handle();

    tokio::select! {
        res = server => res?,
        signal = shutdown_signal() => {
            tracing::warn!("🛑 {} received, shutting down...", signal);
            handle.stop(true).await;
        }
    }

    store.close().await;
    tracing::info!("Shutdown complete");

    Ok(())
}
