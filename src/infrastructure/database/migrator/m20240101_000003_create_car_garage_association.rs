//! Create the car/garage many-to-many join table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_garages::Garages;
use super::m20240101_000002_create_cars::Cars;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarGarageAssociation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CarGarageAssociation::CarId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CarGarageAssociation::GarageId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CarGarageAssociation::CarId)
                            .col(CarGarageAssociation::GarageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_garage_car_id")
                            .from(CarGarageAssociation::Table, CarGarageAssociation::CarId)
                            .to(Cars::Table, Cars::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_garage_garage_id")
                            .from(CarGarageAssociation::Table, CarGarageAssociation::GarageId)
                            .to(Garages::Table, Garages::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarGarageAssociation::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum CarGarageAssociation {
    Table,
    CarId,
    GarageId,
}
