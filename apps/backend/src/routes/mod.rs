use actix_web::web;

pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

/// Configure application routes.
///
/// Used by `main.rs` and by the integration-test app builder so both run
/// the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Auth routes: /auth/**
    cfg.service(web::scope("/auth").configure(auth::configure_routes));

    // User management: /users/**
    cfg.service(web::scope("/users").configure(users::configure_routes));

    // Task management (session-guarded): /tasks/**
    cfg.service(web::scope("/tasks").configure(tasks::configure_routes));
}
