// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,
        crate::api::handlers::generator::analyze_password_body,
        crate::api::handlers::generator::generate_uuid,

        // System endpoints
        crate::api::handlers::system::get_status
    ),
    components(
        schemas(
            crate::api::types::StatusResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisRequest,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::StrengthInfo,
            crate::api::types::UuidResponse
        )
    ),
    tags(
        (name = "Generator", description = "Password, strength and UUID endpoints"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "SecureGen API",
        version = "0.1.0",
        description = "Password and UUID generator with strength scoring",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let address = config.web_address.clone();
    let port = config.web_port;
    log::info!("Starting SecureGen API server on {}:{}", address, port);

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Generation is stateless and unauthenticated
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_generator_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/generator/password", "/generator/analysis/{pwd}", "/generator/analysis", "/generator/uuid", "/status"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
