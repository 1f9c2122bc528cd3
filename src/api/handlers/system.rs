// src/api/handlers/system.rs
use actix_web::{HttpResponse, Responder};

use crate::api::types::StatusResponse;

/// Get service status
#[utoipa::path(
    get,
    path = "/status",
    tag = "System",
    responses(
        (status = 200, description = "Service is up", body = StatusResponse)
    )
)]
pub async fn get_status() -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        success: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use crate::api::routes::configure_routes;
    use crate::api::types::StatusResponse;

    #[actix_web::test]
    async fn status_reports_version() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/status").to_request();
        let body: StatusResponse = test::call_and_read_body_json(&app, req).await;

        assert!(body.success);
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
