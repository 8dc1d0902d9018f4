//! Password hashing and verification (Argon2id, PHC string format).

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};

use crate::AppError;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 5;

/// Hash a plaintext password with a fresh random salt.
///
/// Equal inputs produce different hash strings; the salt and parameters are
/// embedded in the returned PHC string.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes)
        .map_err(|e| AppError::internal(format!("Failed to read random salt: {e}")))?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| AppError::internal(format!("Failed to encode salt: {e}")))?;

    let argon2 = Argon2::default();
    let phc = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?
        .to_string();
    Ok(phc)
}

/// Verify a plaintext password against a stored PHC hash string.
///
/// Recomputes with the embedded salt and compares in constant time. An
/// unparseable hash counts as a mismatch rather than an error; the caller
/// decides how much to reveal.
pub fn verify_password(password: &str, phc: &str) -> bool {
    match PasswordHash::new(phc) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Optional strength policy hook for registration callers. The auth flows
/// themselves never enforce this.
pub fn is_password_strong(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}
