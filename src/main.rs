use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trackmatch::config::Settings;
use trackmatch::core::Matcher;
use trackmatch::routes::{self, AppState};
use trackmatch::services::Catalog;

fn init_tracing(default_level: &str, default_format: &str) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| default_format.to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_tracing(&settings.logging.level, &settings.logging.format);
    info!("Starting trackmatch service...");

    let catalog = Catalog::load(&settings.catalog.path).map_err(|e| {
        error!("Failed to load catalog from {}: {}", settings.catalog.path.display(), e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    // Both already checked by Settings::validate
    let to_io = |e: config::ConfigError| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    };
    let matcher_config = settings.matching.matcher_config(&settings.scoring).map_err(to_io)?;
    let default_algorithm = settings.matching.algorithm().map_err(to_io)?;

    info!("Matcher initialized with {:?}", matcher_config);

    let app_state = AppState {
        catalog: Arc::new(catalog),
        matcher: Matcher::new(matcher_config),
        default_algorithm,
        default_limit: usize::from(settings.matching.default_limit),
        max_limit: usize::from(settings.matching.max_limit),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
