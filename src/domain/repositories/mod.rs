//! Unit-of-work traits for the domain layer
//!
//! Every service call opens exactly one [`UnitOfWork`], does all of its reads
//! and writes through the repositories it exposes, and commits it. Dropping a
//! unit of work without committing rolls everything back, so early returns
//! with an error leave the store untouched.
//!
//! ```ignore
//! let uow = factory.begin().await?;
//! let garage = uow.garages().find_by_id(1).await?;
//! uow.maintenances().delete(7).await?;
//! uow.commit().await?;
//! ```

use async_trait::async_trait;

use super::car::CarRepository;
use super::garage::GarageRepository;
use super::maintenance::MaintenanceRepository;
use crate::shared::errors::DomainResult;

/// One transactional scope with access to all repositories.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn garages(&self) -> &dyn GarageRepository;
    fn cars(&self) -> &dyn CarRepository;
    fn maintenances(&self) -> &dyn MaintenanceRepository;

    async fn commit(self: Box<Self>) -> DomainResult<()>;
}

/// Opens units of work. Injected into every service.
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn UnitOfWork>>;
}
