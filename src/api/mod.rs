// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use std::sync::Arc;
use crate::core::service::PasswordService;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::passwords::generate_passwords,
        crate::api::handlers::passwords::check_complexity,
        crate::api::handlers::passwords::delete_password,
    ),
    components(
        schemas(
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::PasswordRequest,
            crate::api::types::PasswordResponse,
            crate::complexity::Complexity,
            crate::models::GenerationOptions,
        )
    ),
    tags(
        (name = "Passwords", description = "Password generation, classification and deletion endpoints")
    ),
    info(
        title = "PassForge API",
        version = "0.1.0",
        description = "Password generation and deduplicating persistence service",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(service: Arc<PasswordService>, port: u16) -> std::io::Result<()> {
    log::info!("Starting PassForge API server on port {}", port);

    let service_data = web::Data::new(service);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(service_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the API routes
            .configure(routes::configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
