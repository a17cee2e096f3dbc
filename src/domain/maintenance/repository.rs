use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{Maintenance, MaintenanceFilter, NewMaintenance};
use crate::domain::DomainResult;

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    /// Loads the maintenance even if its car or garage row is missing; the
    /// corresponding display name is then `None`.
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Maintenance>>;

    /// Maintenances whose car and garage both exist and that match every set
    /// filter, without duplicates, ordered by scheduled date then id.
    async fn search(&self, filter: &MaintenanceFilter) -> DomainResult<Vec<Maintenance>>;

    async fn insert(&self, maintenance: NewMaintenance) -> DomainResult<i32>;
    async fn update(&self, id: i32, maintenance: NewMaintenance) -> DomainResult<()>;
    async fn delete(&self, id: i32) -> DomainResult<()>;

    async fn count_for_car(&self, car_id: i32) -> DomainResult<u64>;
    async fn count_for_garage(&self, garage_id: i32) -> DomainResult<u64>;

    /// Scheduled dates of the garage's maintenances within `from..=to`.
    async fn scheduled_dates(
        &self,
        garage_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<NaiveDate>>;
}
