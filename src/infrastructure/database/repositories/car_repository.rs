//! SeaORM implementation of CarRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, NotSet, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

use super::garage_repository::entity_to_domain as garage_to_domain;
use super::unit_of_work::{db_err, SeaOrmUnitOfWork};
use crate::domain::car::{Car, CarRepository, NewCar};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{car, car_garage, garage};

fn entity_to_domain(c: car::Model, garages: Vec<garage::Model>) -> Car {
    let mut garages: Vec<_> = garages.into_iter().map(garage_to_domain).collect();
    garages.sort_by_key(|g| g.id);
    Car {
        id: c.id,
        make: c.make,
        model: c.model,
        production_year: c.production_year,
        licence_plate: c.licence_plate,
        garages,
    }
}

#[async_trait]
impl CarRepository for SeaOrmUnitOfWork {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Car>> {
        let Some(model) = car::Entity::find_by_id(id)
            .one(&self.txn)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };

        let garages = model
            .find_related(garage::Entity)
            .all(&self.txn)
            .await
            .map_err(db_err)?;
        Ok(Some(entity_to_domain(model, garages)))
    }

    async fn find_all(&self) -> DomainResult<Vec<Car>> {
        let rows = car::Entity::find()
            .find_with_related(garage::Entity)
            .order_by_asc(car::Column::Id)
            .all(&self.txn)
            .await
            .map_err(db_err)?;
        Ok(rows
            .into_iter()
            .map(|(c, garages)| entity_to_domain(c, garages))
            .collect())
    }

    async fn exists(&self, id: i32) -> DomainResult<bool> {
        let count = car::Entity::find()
            .filter(car::Column::Id.eq(id))
            .count(&self.txn)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn insert(&self, c: NewCar) -> DomainResult<i32> {
        let model = car::ActiveModel {
            id: NotSet,
            make: Set(c.make),
            model: Set(c.model),
            production_year: Set(c.production_year),
            licence_plate: Set(c.licence_plate),
        };
        let result = model.insert(&self.txn).await.map_err(db_err)?;
        info!(car_id = result.id, plate = %result.licence_plate, "Car saved");
        Ok(result.id)
    }

    async fn update(&self, id: i32, c: NewCar) -> DomainResult<()> {
        let model = car::ActiveModel {
            id: Set(id),
            make: Set(c.make),
            model: Set(c.model),
            production_year: Set(c.production_year),
            licence_plate: Set(c.licence_plate),
        };
        model.update(&self.txn).await.map_err(db_err)?;
        info!(car_id = id, "Car updated");
        Ok(())
    }

    async fn replace_garages(&self, car_id: i32, garage_ids: &[i32]) -> DomainResult<()> {
        car_garage::Entity::delete_many()
            .filter(car_garage::Column::CarId.eq(car_id))
            .exec(&self.txn)
            .await
            .map_err(db_err)?;

        if garage_ids.is_empty() {
            return Ok(());
        }

        let links = garage_ids.iter().map(|&garage_id| car_garage::ActiveModel {
            car_id: Set(car_id),
            garage_id: Set(garage_id),
        });
        car_garage::Entity::insert_many(links)
            .exec_without_returning(&self.txn)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        car_garage::Entity::delete_many()
            .filter(car_garage::Column::CarId.eq(id))
            .exec(&self.txn)
            .await
            .map_err(db_err)?;
        car::Entity::delete_by_id(id)
            .exec(&self.txn)
            .await
            .map_err(db_err)?;
        info!(car_id = id, "Car deleted");
        Ok(())
    }
}
