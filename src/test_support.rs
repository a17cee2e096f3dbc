#![cfg(test)]

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::domain::UnitOfWorkFactory;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::SeaOrmUnitOfWorkFactory;

/// Fresh, migrated in-memory SQLite database. Every call gets its own.
///
/// The pool is pinned to a single connection: each `sqlite::memory:`
/// connection would otherwise see a different empty database.
pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("open in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn uow_factory() -> Arc<dyn UnitOfWorkFactory> {
    Arc::new(SeaOrmUnitOfWorkFactory::new(memory_db().await))
}
