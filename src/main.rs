use actix_web::{web, App, HttpServer};
use crewtrack::config::EnvConfig;
use crewtrack::db::postgres_service::PostgresService;
use crewtrack::routes::configure_routes;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(config.db_url.as_str())
            .await
            .expect("Failed to initialize PostgresService"),
    );

    if let Err(e) = postgres_service.seed_if_empty().await {
        error!("Database seeding failed, continuing without seed data: {e}");
    }

    let jwt = web::Data::new(config.jwt.clone());

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(jwt.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
