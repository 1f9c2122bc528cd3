// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Service status
    cfg.route("/status", web::get().to(handlers::system::get_status));

    // Password and UUID generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/analysis", web::post().to(handlers::generator::analyze_password_body))
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze_password))
            .route("/uuid", web::get().to(handlers::generator::generate_uuid))
    );
}
