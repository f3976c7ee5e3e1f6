mod config;
mod coordination;
mod services;

use crate::config::ServerConfig;
use crate::coordination::seed;
use crate::coordination::service::MatchingService;
use crate::coordination::state::CoordinationState;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config =
        ServerConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let service = if config.seed_demo_data {
        seed::demo_service()
    } else {
        MatchingService::new()
    };
    info!(
        "Loaded {} requests and {} donations",
        service.requests().len(),
        service.donations().len()
    );
    let state = CoordinationState::new(service);

    info!("Server running at {}", config.url());

    let json_limit = config.json_limit;
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(services::json_config(json_limit))
            .app_data(services::query_config())
            .app_data(services::path_config())
            .app_data(web::Data::new(state.clone()))
            .service(services::dashboard::configure_routes())
            .service(services::emergency::configure_routes())
            .service(services::requests::configure_routes())
            .service(services::donations::configure_routes())
            .service(services::matches::configure_routes())
            .service(services::items::configure_routes())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
