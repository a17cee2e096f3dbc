//! SeaORM unit of work
//!
//! Wraps one `DatabaseTransaction`. The per-aggregate repository traits are
//! implemented directly on [`SeaOrmUnitOfWork`] (see the sibling modules), so
//! every query a service issues runs inside the same transaction.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::debug;

use crate::domain::car::CarRepository;
use crate::domain::garage::GarageRepository;
use crate::domain::maintenance::MaintenanceRepository;
use crate::domain::repositories::{UnitOfWork, UnitOfWorkFactory};
use crate::domain::{DomainError, DomainResult};

pub(super) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

pub struct SeaOrmUnitOfWork {
    pub(super) txn: DatabaseTransaction,
}

#[async_trait]
impl UnitOfWork for SeaOrmUnitOfWork {
    fn garages(&self) -> &dyn GarageRepository {
        self
    }

    fn cars(&self) -> &dyn CarRepository {
        self
    }

    fn maintenances(&self) -> &dyn MaintenanceRepository {
        self
    }

    async fn commit(self: Box<Self>) -> DomainResult<()> {
        self.txn.commit().await.map_err(db_err)?;
        debug!("Transaction committed");
        Ok(())
    }
}

/// Opens a new transaction on the shared connection pool per unit of work.
#[derive(Clone)]
pub struct SeaOrmUnitOfWorkFactory {
    db: DatabaseConnection,
}

impl SeaOrmUnitOfWorkFactory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWorkFactory for SeaOrmUnitOfWorkFactory {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>> {
        let txn = self.db.begin().await.map_err(db_err)?;
        Ok(Box::new(SeaOrmUnitOfWork { txn }))
    }
}
