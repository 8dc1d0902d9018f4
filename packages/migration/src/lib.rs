pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

mod m20260830_000001_create_users_and_tasks; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260830_000001_create_users_and_tasks::Migration)]
    }
}

/// Apply all pending migrations. Used by app bootstrap and tests.
pub async fn migrate_up(db: &DatabaseConnection) -> Result<(), DbErr> {
    let defined = Migrator::migrations().len();
    let applied = count_applied_migrations(db).await.unwrap_or(0);
    tracing::info!(defined, applied, "running migrations");

    Migrator::up(db, None).await?;

    let applied = count_applied_migrations(db).await.unwrap_or(0);
    tracing::info!(applied, "migrations up to date");
    Ok(())
}

/// Count the number of migrations that have been applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0), // Migration table doesn't exist yet
        Err(e) => Err(e),
    }
}
