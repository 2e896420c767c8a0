// src/api/handlers/passwords.rs

use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::api::types::{GenerateRequest, GenerateResponse, PasswordRequest, PasswordResponse};
use crate::complexity;
use crate::core::service::{PasswordService, ServiceError};
use crate::generators::PasswordGenerator;
use crate::models::GenerationOptions;

/// Generate and persist a batch of passwords
///
/// Generates the requested amount of passwords, persists the ones not already
/// stored, and reports the rejected duplicates.
#[utoipa::path(
    post,
    path = "/passwords/generate",
    tag = "Passwords",
    request_body = GenerateRequest,
    responses(
        (status = 201, description = "Generated batch with rejected duplicates", body = GenerateResponse),
        (status = 400, description = "Invalid generation parameters", body = GenerateResponse),
        (status = 500, description = "Server error", body = GenerateResponse)
    )
)]
pub async fn generate_passwords(
    service: web::Data<Arc<PasswordService>>,
    request: web::Json<GenerateRequest>,
) -> impl Responder {
    let options = GenerationOptions {
        length: request.length,
        lower_case: request.lower_case.unwrap_or(false),
        upper_case: request.upper_case.unwrap_or(false),
        special_case: request.special_case.unwrap_or(false),
        amount: request.amount.unwrap_or(1),
    };

    // A bad request parameter rejects the whole batch before any password is
    // generated
    let generator = PasswordGenerator::new();
    let passwords = match generator.generate(&options) {
        Ok(batch) => batch,
        Err(e) => {
            return HttpResponse::BadRequest().json(GenerateResponse {
                success: false,
                passwords: vec![],
                duplicates: vec![],
                complexity: None,
                error: Some(e.to_string()),
            });
        }
    };

    let duplicates = match service.persist_unique(&passwords).await {
        Ok(duplicates) => duplicates,
        Err(e) => {
            error!("Failed to persist generated batch: {}", e);
            return HttpResponse::InternalServerError().json(GenerateResponse {
                success: false,
                passwords: vec![],
                duplicates: vec![],
                complexity: None,
                error: Some(format!("Failed to persist batch: {}", e)),
            });
        }
    };

    let complexity = passwords.first().map(|entry| entry.complexity);

    HttpResponse::Created().json(GenerateResponse {
        success: true,
        passwords: passwords.into_iter().map(|entry| entry.password).collect(),
        duplicates: duplicates.into_iter().map(|entry| entry.password).collect(),
        complexity,
        error: None,
    })
}

/// Classify a password
///
/// Returns the stored record's complexity and generation timestamp when the
/// password was previously persisted; otherwise classifies it fresh with a
/// null timestamp.
#[utoipa::path(
    post,
    path = "/passwords/complexity",
    tag = "Passwords",
    request_body = PasswordRequest,
    responses(
        (status = 200, description = "Complexity of the password", body = PasswordResponse),
        (status = 400, description = "Invalid password length", body = PasswordResponse),
        (status = 500, description = "Server error", body = PasswordResponse)
    )
)]
pub async fn check_complexity(
    service: web::Data<Arc<PasswordService>>,
    request: web::Json<PasswordRequest>,
) -> impl Responder {
    let PasswordRequest { password } = request.into_inner();

    match service.lookup(&password).await {
        Ok(Some(found)) => HttpResponse::Ok().json(found_response(found)),
        Ok(None) => classify_fresh(password),
        Err(e) => {
            error!("Lookup failed: {}", e);
            service_failure(&e)
        }
    }
}

/// Delete a stored password
///
/// Removes the record verify-matching the password and returns its
/// projection; a password that was never persisted is classified fresh and
/// reported with a null timestamp.
#[utoipa::path(
    delete,
    path = "/passwords",
    tag = "Passwords",
    request_body = PasswordRequest,
    responses(
        (status = 200, description = "Removed or classified password", body = PasswordResponse),
        (status = 400, description = "Invalid password length", body = PasswordResponse),
        (status = 500, description = "Server error", body = PasswordResponse)
    )
)]
pub async fn delete_password(
    service: web::Data<Arc<PasswordService>>,
    request: web::Json<PasswordRequest>,
) -> impl Responder {
    let PasswordRequest { password } = request.into_inner();

    match service.delete(&password).await {
        Ok(Some(removed)) => HttpResponse::Ok().json(found_response(removed)),
        Ok(None) => classify_fresh(password),
        Err(e) => {
            error!("Delete failed: {}", e);
            service_failure(&e)
        }
    }
}

fn found_response(entry: crate::models::GeneratedPassword) -> PasswordResponse {
    PasswordResponse {
        success: true,
        password: Some(entry.password),
        complexity: Some(entry.complexity),
        generated_at: Some(entry.generated_at),
        error: None,
    }
}

// A password that was never persisted still gets a tier; the null timestamp
// is what signals "never stored".
fn classify_fresh(password: String) -> HttpResponse {
    match complexity::classify(&password) {
        Ok(tier) => HttpResponse::Ok().json(PasswordResponse {
            success: true,
            password: Some(password),
            complexity: Some(tier),
            generated_at: None,
            error: None,
        }),
        Err(e) => HttpResponse::BadRequest().json(PasswordResponse {
            success: false,
            password: None,
            complexity: None,
            generated_at: None,
            error: Some(e.to_string()),
        }),
    }
}

fn service_failure(e: &ServiceError) -> HttpResponse {
    HttpResponse::InternalServerError().json(PasswordResponse {
        success: false,
        password: None,
        complexity: None,
        generated_at: None,
        error: Some(e.to_string()),
    })
}
