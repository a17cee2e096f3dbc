//! Maintenance entity

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Free-form description, e.g. "Oil change"
    pub service_type: String,

    pub scheduled_date: NaiveDate,

    pub garage_id: i32,

    pub car_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::car::Entity",
        from = "Column::CarId",
        to = "super::car::Column::Id"
    )]
    Car,
    #[sea_orm(
        belongs_to = "super::garage::Entity",
        from = "Column::GarageId",
        to = "super::garage::Column::Id"
    )]
    Garage,
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl Related<super::garage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Garage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
