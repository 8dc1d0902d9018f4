//! Fixture helpers for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use backend::repos::users::User;
use backend::services::users::{create_user, NewUser};
use backend::state::app_state::AppState;
use backend::AppError;

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// A name that is unique within the test process.
pub fn unique_name(prefix: &str) -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}@example.com", unique_name(prefix))
}

/// Password accepted by the registration policy (length, letter, digit).
pub const TEST_PASSWORD: &str = "correct-pw1";

/// Register a user directly through the service layer.
pub async fn register_user(state: &AppState, name: &str, password: &str) -> Result<User, AppError> {
    let db = state.require_db()?;
    create_user(
        db,
        NewUser {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            password: password.to_string(),
        },
    )
    .await
}
