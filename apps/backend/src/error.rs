use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

/// Application error. Auth variants carry no payload on purpose: the
/// response must not reveal whether a username exists or why exactly a
/// token was rejected beyond its broad category.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized: missing bearer token")]
    MissingToken,
    #[error("Unauthorized: invalid token")]
    InvalidToken,
    #[error("Unauthorized: incomplete claims")]
    IncompleteClaims,
    #[error("Unauthorized: token has no expiry")]
    MissingExpiry,
    #[error("Unauthorized: token expired")]
    Expired,
    #[error("Unauthorized: invalid credentials")]
    InvalidCredentials,
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: &'static str, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: &'static str, detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Stable machine-readable code for each error variant.
    pub fn code(&self) -> String {
        match self {
            AppError::MissingToken => "UNAUTHORIZED_MISSING_TOKEN".to_string(),
            AppError::InvalidToken => "UNAUTHORIZED_INVALID_TOKEN".to_string(),
            AppError::IncompleteClaims => "UNAUTHORIZED_INCOMPLETE_CLAIMS".to_string(),
            AppError::MissingExpiry => "UNAUTHORIZED_MISSING_EXPIRY".to_string(),
            AppError::Expired => "UNAUTHORIZED_EXPIRED_TOKEN".to_string(),
            AppError::InvalidCredentials => "UNAUTHORIZED_INVALID_CREDENTIALS".to_string(),
            AppError::NotFound { code, .. } => code.to_string(),
            AppError::BadRequest { code, .. } => code.to_string(),
            AppError::Conflict { code, .. } => code.to_string(),
            AppError::Db { .. } => "DB_ERROR".to_string(),
            AppError::Internal { .. } => "INTERNAL".to_string(),
            AppError::Config { .. } => "CONFIG_ERROR".to_string(),
        }
    }

    /// Human-readable detail string for the response body.
    fn detail(&self) -> String {
        match self {
            AppError::MissingToken => "Missing or malformed Bearer token".to_string(),
            AppError::InvalidToken => "Invalid access token".to_string(),
            AppError::IncompleteClaims => "Could not validate user".to_string(),
            AppError::MissingExpiry => "Access token has no expiry".to_string(),
            AppError::Expired => "Access token expired".to_string(),
            AppError::InvalidCredentials => "Invalid username or password".to_string(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Db { detail } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingToken
            | AppError::InvalidToken
            | AppError::IncompleteClaims
            | AppError::MissingExpiry
            | AppError::Expired
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Db { .. } | AppError::Internal { .. } | AppError::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn not_found(code: &'static str, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: &'static str, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: &'static str, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(format!("db error: {e}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let detail = self.detail();

        let problem_details = ProblemDetails {
            type_: format!("https://taskboard.dev/errors/{}", code.to_uppercase()),
            title: Self::humanize_code(&code),
            status: status.as_u16(),
            detail,
            code,
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .json(problem_details)
    }
}
