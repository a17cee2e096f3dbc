//! SeaORM implementation of GarageRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use super::unit_of_work::{db_err, SeaOrmUnitOfWork};
use crate::domain::garage::{Garage, GarageRepository, NewGarage};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{car_garage, garage};

pub(super) fn entity_to_domain(g: garage::Model) -> Garage {
    Garage {
        id: g.id,
        name: g.name,
        location: g.location,
        city: g.city,
        capacity: g.capacity,
    }
}

/// SQLite's `LOWER()` only folds ASCII letters, so the pattern is folded the
/// same way. Non-ASCII letters match case-sensitively.
fn city_pattern(city: &str) -> String {
    format!("%{}%", city.to_ascii_lowercase())
}

#[async_trait]
impl GarageRepository for SeaOrmUnitOfWork {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Garage>> {
        let model = garage::Entity::find_by_id(id)
            .one(&self.txn)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn search(&self, city: Option<&str>) -> DomainResult<Vec<Garage>> {
        let mut query = garage::Entity::find().order_by_asc(garage::Column::Id);

        if let Some(city) = city {
            // LOWER() on both sides keeps the match case-insensitive on
            // backends where LIKE is case-sensitive.
            query = query.filter(
                Expr::expr(Func::lower(Expr::col((garage::Entity, garage::Column::City))))
                    .like(city_pattern(city)),
            );
        }

        let models = query.all(&self.txn).await.map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> DomainResult<Vec<Garage>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = garage::Entity::find()
            .filter(garage::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(garage::Column::Id)
            .all(&self.txn)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn insert(&self, g: NewGarage) -> DomainResult<Garage> {
        let model = garage::ActiveModel {
            id: NotSet,
            name: Set(g.name),
            location: Set(g.location),
            city: Set(g.city),
            capacity: Set(g.capacity),
        };
        let result = model.insert(&self.txn).await.map_err(db_err)?;
        info!(garage_id = result.id, name = %result.name, "Garage saved");
        Ok(entity_to_domain(result))
    }

    async fn update(&self, id: i32, g: NewGarage) -> DomainResult<Garage> {
        let model = garage::ActiveModel {
            id: Set(id),
            name: Set(g.name),
            location: Set(g.location),
            city: Set(g.city),
            capacity: Set(g.capacity),
        };
        let result = model.update(&self.txn).await.map_err(db_err)?;
        info!(garage_id = id, "Garage updated");
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        car_garage::Entity::delete_many()
            .filter(car_garage::Column::GarageId.eq(id))
            .exec(&self.txn)
            .await
            .map_err(db_err)?;
        garage::Entity::delete_by_id(id)
            .exec(&self.txn)
            .await
            .map_err(db_err)?;
        info!(garage_id = id, "Garage deleted");
        Ok(())
    }
}
