// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generation, classification and deletion
    cfg.service(
        web::scope("/passwords")
            .route(
                "/generate",
                web::post().to(handlers::passwords::generate_passwords),
            )
            .route(
                "/complexity",
                web::post().to(handlers::passwords::check_complexity),
            )
            .route("", web::delete().to(handlers::passwords::delete_password)),
    );
}
