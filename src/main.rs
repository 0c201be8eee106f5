use actix_web::{
    middleware::{Compress, Logger, NormalizePath, TrailingSlash},
    web::{self, Data},
    App, HttpServer,
};
use settings::Settings;
use tracing_subscriber::EnvFilter;
use upstream::UpstreamClient;

mod macros;
mod models;
mod normalizer;
mod paths;
mod request_error;
mod service;
mod settings;
mod upstream;

async fn default_handler_debug(req: actix_web::HttpRequest) -> impl actix_web::Responder {
    macros::resp_404_NotFound!(format!("{:#?}", req))
}
async fn default_handler() -> impl actix_web::Responder {
    macros::resp_404_NotFound!()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = Settings::from_env().map_err(std::io::Error::other)?;
    tracing::info!(
        "Debug is {}",
        if settings.is_debug_on {
            "enabled"
        } else {
            "disabled"
        }
    );
    tracing::info!(upstream = %settings.upstream_url, "Forwarding lookups upstream");

    let req_client = upstream::build_client().map_err(std::io::Error::other)?;
    let upstream = UpstreamClient::new(req_client, settings.upstream_url.clone())
        .map_err(std::io::Error::other)?;
    let pokemon_service = Data::new(service::PokemonService::new(upstream));
    let is_debug_on = settings.is_debug_on;

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Logger::default())
            .wrap(Compress::default())
            .app_data(pokemon_service.clone())
            .configure(paths::configure)
            .default_service(if is_debug_on {
                web::to(default_handler_debug)
            } else {
                web::to(default_handler)
            })
    })
    .bind(&settings.bind_address)?
    .run()
    .await
}
