//! SeaORM implementation of MaintenanceRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};
use tracing::info;

use super::unit_of_work::{db_err, SeaOrmUnitOfWork};
use crate::domain::maintenance::{
    Maintenance, MaintenanceFilter, MaintenanceRepository, NewMaintenance,
};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{car, garage, maintenance};

/// Maintenance row joined with the car make and garage name.
#[derive(Debug, FromQueryResult)]
struct MaintenanceRow {
    id: i32,
    service_type: String,
    scheduled_date: NaiveDate,
    car_id: i32,
    garage_id: i32,
    car_name: Option<String>,
    garage_name: Option<String>,
}

impl From<MaintenanceRow> for Maintenance {
    fn from(row: MaintenanceRow) -> Self {
        Maintenance {
            id: row.id,
            service_type: row.service_type,
            scheduled_date: row.scheduled_date,
            car_id: row.car_id,
            garage_id: row.garage_id,
            car_name: row.car_name,
            garage_name: row.garage_name,
        }
    }
}

fn with_names(join: JoinType) -> Select<maintenance::Entity> {
    maintenance::Entity::find()
        .select_only()
        .columns([
            maintenance::Column::Id,
            maintenance::Column::ServiceType,
            maintenance::Column::ScheduledDate,
            maintenance::Column::CarId,
            maintenance::Column::GarageId,
        ])
        .column_as(car::Column::Make, "car_name")
        .column_as(garage::Column::Name, "garage_name")
        .join(join, maintenance::Relation::Car.def())
        .join(join, maintenance::Relation::Garage.def())
}

#[async_trait]
impl MaintenanceRepository for SeaOrmUnitOfWork {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Maintenance>> {
        let row = with_names(JoinType::LeftJoin)
            .filter(maintenance::Column::Id.eq(id))
            .into_model::<MaintenanceRow>()
            .one(&self.txn)
            .await
            .map_err(db_err)?;
        Ok(row.map(Into::into))
    }

    async fn search(&self, filter: &MaintenanceFilter) -> DomainResult<Vec<Maintenance>> {
        let mut query = with_names(JoinType::InnerJoin);

        if let Some(car_id) = filter.car_id {
            query = query.filter(maintenance::Column::CarId.eq(car_id));
        }
        if let Some(garage_id) = filter.garage_id {
            query = query.filter(maintenance::Column::GarageId.eq(garage_id));
        }
        if let Some(start) = filter.start_date {
            query = query.filter(maintenance::Column::ScheduledDate.gte(start));
        }
        if let Some(end) = filter.end_date {
            query = query.filter(maintenance::Column::ScheduledDate.lte(end));
        }

        let rows = query
            .distinct()
            .order_by_asc(maintenance::Column::ScheduledDate)
            .order_by_asc(maintenance::Column::Id)
            .into_model::<MaintenanceRow>()
            .all(&self.txn)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, m: NewMaintenance) -> DomainResult<i32> {
        let model = maintenance::ActiveModel {
            id: NotSet,
            service_type: Set(m.service_type),
            scheduled_date: Set(m.scheduled_date),
            garage_id: Set(m.garage_id),
            car_id: Set(m.car_id),
        };
        let result = model.insert(&self.txn).await.map_err(db_err)?;
        info!(
            maintenance_id = result.id,
            car_id = result.car_id,
            garage_id = result.garage_id,
            date = %result.scheduled_date,
            "Maintenance scheduled"
        );
        Ok(result.id)
    }

    async fn update(&self, id: i32, m: NewMaintenance) -> DomainResult<()> {
        let model = maintenance::ActiveModel {
            id: Set(id),
            service_type: Set(m.service_type),
            scheduled_date: Set(m.scheduled_date),
            garage_id: Set(m.garage_id),
            car_id: Set(m.car_id),
        };
        model.update(&self.txn).await.map_err(db_err)?;
        info!(maintenance_id = id, "Maintenance updated");
        Ok(())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        maintenance::Entity::delete_by_id(id)
            .exec(&self.txn)
            .await
            .map_err(db_err)?;
        info!(maintenance_id = id, "Maintenance deleted");
        Ok(())
    }

    async fn count_for_car(&self, car_id: i32) -> DomainResult<u64> {
        maintenance::Entity::find()
            .filter(maintenance::Column::CarId.eq(car_id))
            .count(&self.txn)
            .await
            .map_err(db_err)
    }

    async fn count_for_garage(&self, garage_id: i32) -> DomainResult<u64> {
        maintenance::Entity::find()
            .filter(maintenance::Column::GarageId.eq(garage_id))
            .count(&self.txn)
            .await
            .map_err(db_err)
    }

    async fn scheduled_dates(
        &self,
        garage_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> DomainResult<Vec<NaiveDate>> {
        maintenance::Entity::find()
            .select_only()
            .column(maintenance::Column::ScheduledDate)
            .filter(maintenance::Column::GarageId.eq(garage_id))
            .filter(maintenance::Column::ScheduledDate.between(from, to))
            .into_tuple::<NaiveDate>()
            .all(&self.txn)
            .await
            .map_err(db_err)
    }
}
