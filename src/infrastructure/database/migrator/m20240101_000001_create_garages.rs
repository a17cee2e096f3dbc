//! Create garages table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Garages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Garages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Garages::Name).string().not_null())
                    .col(ColumnDef::new(Garages::Location).string().not_null())
                    .col(ColumnDef::new(Garages::City).string().not_null())
                    .col(ColumnDef::new(Garages::Capacity).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_garages_city")
                    .table(Garages::Table)
                    .col(Garages::City)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Garages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Garages {
    Table,
    Id,
    Name,
    Location,
    City,
    Capacity,
}
