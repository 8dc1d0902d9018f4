use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::session::{resolve_bearer, AuthenticatedUser};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// The authenticated principal for the current request, resolved from the
/// bearer token alone. No database lookup happens here: the claims were
/// signed by us and are the source of truth for name and id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub AuthenticatedUser);

impl CurrentUser {
    pub fn id(&self) -> i64 {
        self.0.id
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;

            let token = req
                .headers()
                .get(actix_web::http::header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(|value| crate::extractors::auth_token::AuthToken::parse_header(value))
                .transpose()?
                .map(|auth| auth.token);

            let user = resolve_bearer(
                token.as_deref(),
                std::time::SystemTime::now(),
                &app_state.security,
            )?;

            Ok(CurrentUser(user))
        })
    }
}
