use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Default lifetime of an issued access token.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(15 * 60);

/// Insecure fallback used when no signing key is configured. Deployments
/// must set BACKEND_JWT_SECRET; startup logs a warning when this is used.
pub const INSECURE_DEFAULT_SECRET: &[u8] = b"insecure_default_secret_change_me";

/// Configuration for JWT security settings.
///
/// Constructed once at process start and passed by handle into the token
/// codec and session guard; there is no ambient global signing key. Rotating
/// the key invalidates all previously issued tokens, which is accepted.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    /// Lifetime of issued access tokens
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Override the token lifetime (tests use short ttls).
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(INSECURE_DEFAULT_SECRET)
    }
}
