pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::{SeaOrmUnitOfWork, SeaOrmUnitOfWorkFactory};

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{debug, info};

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./garage.db?mode=rwc")
    pub url: String,
    /// Upper bound of the connection pool, see [`DatabaseConfig::pool_size`]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::sqlite("./garage.db")
    }
}

impl DatabaseConfig {
    /// Create config for SQLite
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
            max_connections: 1,
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }

    /// Connections the pool may open.
    ///
    /// SQLite is pinned to one: two deferred transactions that both read and
    /// then write cannot be upgraded at the same time, and the loser gets
    /// `SQLITE_BUSY` immediately instead of waiting on the busy timeout.
    /// Requests queue for the connection instead.
    pub fn pool_size(&self) -> u32 {
        if self.is_sqlite() {
            1
        } else {
            self.max_connections.max(1)
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let pool_size = config.pool_size();
    if pool_size != config.max_connections {
        debug!(
            requested = config.max_connections,
            pool_size, "Connection pool size adjusted for backend"
        );
    }

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(pool_size)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(30))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}
