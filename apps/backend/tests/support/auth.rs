//! Token helpers for tests

use std::time::SystemTime;

use backend::auth::jwt::mint_access_token;
use backend::state::security_config::SecurityConfig;

/// Mint a bearer token for the given user
pub fn mint_test_token(name: &str, user_id: i64, sec: &SecurityConfig) -> String {
    mint_access_token(name, user_id, SystemTime::now(), sec)
        .expect("should mint token successfully")
}

/// Mint a full Authorization header value including the "Bearer " prefix
pub fn bearer_header(name: &str, user_id: i64, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(name, user_id, sec))
}

/// Mint a token whose expiry is already in the past
pub fn mint_expired_token(name: &str, user_id: i64, sec: &SecurityConfig) -> String {
    let past_time = SystemTime::now()
        .checked_sub(std::time::Duration::from_secs(7200))
        .unwrap();
    mint_access_token(name, user_id, past_time, sec).expect("should mint expired token")
}
