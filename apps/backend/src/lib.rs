#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports for public API
pub use auth::claims::AccessClaims;
pub use auth::jwt::{decode_access_token, mint_access_token};
pub use auth::password::{hash_password, is_password_strong, verify_password};
pub use auth::session::{resolve_bearer, AuthenticatedUser};
pub use config::db::{db_url, DbProfile};
pub use error::AppError;
pub use extractors::auth_token::AuthToken;
pub use extractors::current_user::CurrentUser;
pub use infra::db::{bootstrap_db, connect_db};
pub use infra::state::build_state;
pub use middleware::cors::cors_middleware;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
