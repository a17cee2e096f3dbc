use async_trait::async_trait;

use super::model::{Car, NewCar};
use crate::domain::DomainResult;

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Car>>;
    async fn find_all(&self) -> DomainResult<Vec<Car>>;
    async fn exists(&self, id: i32) -> DomainResult<bool>;
    /// Inserts the car row only; associations are set with
    /// [`replace_garages`](Self::replace_garages).
    async fn insert(&self, car: NewCar) -> DomainResult<i32>;
    async fn update(&self, id: i32, car: NewCar) -> DomainResult<()>;
    /// Replaces the car's garage associations with exactly `garage_ids`.
    async fn replace_garages(&self, car_id: i32, garage_ids: &[i32]) -> DomainResult<()>;
    /// Removes the car together with its garage associations.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
