//! Garage repository interface

use async_trait::async_trait;

use super::model::{Garage, NewGarage};
use crate::domain::DomainResult;

#[async_trait]
pub trait GarageRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Garage>>;
    /// Garages ordered by id, optionally restricted to cities containing
    /// `city` (case-insensitive).
    async fn search(&self, city: Option<&str>) -> DomainResult<Vec<Garage>>;
    async fn find_by_ids(&self, ids: &[i32]) -> DomainResult<Vec<Garage>>;
    async fn insert(&self, garage: NewGarage) -> DomainResult<Garage>;
    async fn update(&self, id: i32, garage: NewGarage) -> DomainResult<Garage>;
    /// Removes the garage together with its car associations.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
