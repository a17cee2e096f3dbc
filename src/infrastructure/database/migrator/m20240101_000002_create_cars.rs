//! Create cars table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cars::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cars::Make).string().not_null())
                    .col(ColumnDef::new(Cars::Model).string().not_null())
                    .col(ColumnDef::new(Cars::ProductionYear).integer().not_null())
                    .col(ColumnDef::new(Cars::LicencePlate).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Cars {
    Table,
    Id,
    Make,
    Model,
    ProductionYear,
    LicencePlate,
}
