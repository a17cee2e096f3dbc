//! Create maintenances table

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
                    .table(Maintenances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Maintenances::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Maintenances::ServiceType).string().not_null())
                    .col(ColumnDef::new(Maintenances::ScheduledDate).date().not_null())
                    .col(ColumnDef::new(Maintenances::GarageId).integer().not_null())
                    .col(ColumnDef::new(Maintenances::CarId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenances_garage_id")
                            .from(Maintenances::Table, Maintenances::GarageId)
                            .to(Garages::Table, Garages::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenances_car_id")
                            .from(Maintenances::Table, Maintenances::CarId)
                            .to(Cars::Table, Cars::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Monthly report scans by garage and date
        manager
            .create_index(
                Index::create()
                    .name("idx_maintenances_garage_date")
                    .table(Maintenances::Table)
                    .col(Maintenances::GarageId)
                    .col(Maintenances::ScheduledDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_maintenances_car_id")
                    .table(Maintenances::Table)
                    .col(Maintenances::CarId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Maintenances::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Maintenances {
    Table,
    Id,
    ServiceType,
    ScheduledDate,
    GarageId,
    CarId,
}
