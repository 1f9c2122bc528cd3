// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, warn};

use crate::api::types::{
    PasswordAnalysisRequest, PasswordAnalysisResponse, PasswordGenerationRequest,
    PasswordGenerationResponse, UuidQuery, UuidResponse,
};
use crate::core::config::Config;
use crate::core::session::NO_CATEGORY_MESSAGE;
use crate::generators::{analyze_password_strength, generate_uuid_v4, strength_feedback, PasswordGenerator};
use crate::models::{clamp_length, GenerationRequest};

const MAX_UUIDS_PER_REQUEST: usize = 100;

/// Generate a secure password
///
/// Generates a password based on the provided options. Out-of-range lengths
/// are clamped and an empty selection falls back to uppercase letters.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let length = generation_req
        .length
        .map(clamp_length)
        .unwrap_or(config.default_password_length);

    let request = GenerationRequest::from_flags(
        length,
        generation_req.include_uppercase.unwrap_or(true),
        generation_req.include_lowercase.unwrap_or(true),
        generation_req.include_numbers.unwrap_or(true),
        generation_req.include_symbols.unwrap_or(true),
    );

    let generated = PasswordGenerator::new().generate_password(&request);
    if generated.used_fallback {
        warn!("Password requested without character types, used uppercase");
    }
    debug!("Served {}-character password", length);

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        strength: Some(generated.strength.into()),
        password: Some(generated.password),
        used_fallback: generated.used_fallback,
        warning: generated.used_fallback.then(|| NO_CATEGORY_MESSAGE.to_string()),
        error: None,
    })
}

fn analysis_response(password: &str) -> PasswordAnalysisResponse {
    PasswordAnalysisResponse {
        success: true,
        strength: Some(analyze_password_strength(password).into()),
        feedback: strength_feedback(password),
        error: None,
    }
}

/// Analyze password strength
///
/// Analyzes the strength of a password passed in the path.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(path: web::Path<String>) -> impl Responder {
    // The path extractor has already percent-decoded the segment
    let password = path.into_inner();
    HttpResponse::Ok().json(analysis_response(&password))
}

/// Analyze password strength
///
/// Same as the path variant, but keeps the password out of URLs and logs.
#[utoipa::path(
    post,
    path = "/generator/analysis",
    tag = "Generator",
    request_body = PasswordAnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn analyze_password_body(body: web::Json<PasswordAnalysisRequest>) -> impl Responder {
    HttpResponse::Ok().json(analysis_response(&body.password))
}

/// Generate UUIDs
#[utoipa::path(
    get,
    path = "/generator/uuid",
    tag = "Generator",
    params(UuidQuery),
    responses(
        (status = 200, description = "Generated version 4 UUIDs", body = UuidResponse)
    )
)]
pub async fn generate_uuid(query: web::Query<UuidQuery>) -> impl Responder {
    let count = query.count.unwrap_or(1).clamp(1, MAX_UUIDS_PER_REQUEST);

    HttpResponse::Ok().json(UuidResponse {
        success: true,
        uuids: (0..count).map(|_| generate_uuid_v4()).collect(),
    })
}
