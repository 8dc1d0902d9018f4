use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::AccessClaims;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Mint a signed access token for the given user.
///
/// The expiry is `now + security.token_ttl` (15 minutes unless overridden).
pub fn mint_access_token(
    name: &str,
    user_id: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let exp = iat + security.token_ttl.as_secs() as i64;

    let claims = AccessClaims {
        sub: Some(name.to_string()),
        id: Some(user_id),
        exp: Some(exp),
    };

    sign_claims(&claims, security)
}

/// Sign an arbitrary claims set. Split out so tests (and only tests, in
/// practice) can issue tokens with missing fields.
pub fn sign_claims(claims: &AccessClaims, security: &SecurityConfig) -> Result<String, AppError> {
    encode(
        &Header::new(security.algorithm),
        claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify the token's signature and return its claims unmodified.
///
/// Expiry is deliberately NOT checked here; the session guard owns that
/// decision so there is exactly one place mapping time to an error.
///
/// Errors:
/// - Bad signature, malformed input, or wrong algorithm → `AppError::InvalidToken`
pub fn decode_access_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<AccessClaims, AppError> {
    // Pin the algorithm; disable the library's own expiry handling so the
    // guard can distinguish "no expiry" from "expired".
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidToken)
}
