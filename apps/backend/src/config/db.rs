use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DbProfile {
    /// Production database (Postgres, from DATABASE_URL)
    Prod,
    /// Test database (private in-memory sqlite)
    Test,
}

/// Builds a database URL for the given profile.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("DATABASE_URL"),
        DbProfile::Test => Ok("sqlite::memory:".to_string()),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

#[cfg(test)]
mod tests {
    use super::{db_url, DbProfile};

    #[test]
    fn test_test_profile_is_in_memory_sqlite() {
        assert_eq!(db_url(DbProfile::Test).unwrap(), "sqlite::memory:");
    }

    #[test]
    fn test_prod_profile_requires_database_url() {
        std::env::remove_var("DATABASE_URL");
        assert!(db_url(DbProfile::Prod).is_err());
    }
}
