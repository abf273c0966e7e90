//! Create `tienda` table.
//!
//! `id_tienda` is a serial key assigned by the database on insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tienda::Table)
                    .if_not_exists()
                    .col(pk_auto(Tienda::IdTienda))
                    .col(string_len(Tienda::Nombre, 255).not_null())
                    .col(string_len_null(Tienda::Direccion, 500))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tienda::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tienda { Table, IdTienda, Nombre, Direccion }
