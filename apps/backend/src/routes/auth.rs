use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::services::auth::login;
use crate::state::app_state::AppState;

/// OAuth2-style password grant form: `username` and `password` as
/// form-encoded fields.
#[derive(Debug, Deserialize)]
pub struct TokenRequestForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
struct CurrentUserBody {
    username: String,
    id: i64,
}

#[derive(Debug, Serialize)]
struct CurrentUserResponse {
    #[serde(rename = "User")]
    user: CurrentUserBody,
}

/// POST /auth/token — exchange credentials for a bearer access token.
async fn issue_token(
    form: web::Form<TokenRequestForm>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;

    let issued = login(db, &form.username, &form.password, &app_state.security).await?;
    Ok(HttpResponse::Ok().json(issued))
}

/// GET /auth/read_current_user — echo the identity resolved from the token.
async fn read_current_user(current_user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(CurrentUserResponse {
        user: CurrentUserBody {
            username: current_user.username().to_string(),
            id: current_user.id(),
        },
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/token", web::post().to(issue_token))
        .route("/read_current_user", web::get().to(read_current_user));
}
