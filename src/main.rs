use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use prompt_wizard_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").is_ok_and(|env| env == "production") {
        config.validate_for_production();
    }
    if !config.has_openai_key() {
        log::warn!("OPENAI_API_KEY is not set; generation requests will fail until it is configured");
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = web::Data::new(AppState::new(config));

    log::info!("Server running on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
