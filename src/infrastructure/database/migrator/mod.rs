//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_garages;
mod m20240101_000002_create_cars;
mod m20240101_000003_create_car_garage_association;
mod m20240101_000004_create_maintenances;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_garages::Migration),
            Box::new(m20240101_000002_create_cars::Migration),
            Box::new(m20240101_000003_create_car_garage_association::Migration),
            Box::new(m20240101_000004_create_maintenances::Migration),
        ]
    }
}
