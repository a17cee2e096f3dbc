//! Garage entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "garages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    /// Street address
    pub location: String,

    pub city: String,

    /// Maximum daily scheduled maintenances (not enforced)
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::maintenance::Entity")]
    Maintenance,
    #[sea_orm(has_many = "super::car_garage::Entity")]
    CarGarage,
}

impl Related<super::maintenance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Maintenance.def()
    }
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        super::car_garage::Relation::Car.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::car_garage::Relation::Garage.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
