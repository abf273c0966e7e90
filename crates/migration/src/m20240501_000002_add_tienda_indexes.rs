//! Unique (nombre, direccion) index.
//!
//! Backs the duplicate rule when two identical creates race past the
//! service-level lookup; the repository reports its violation as a conflict.
//! A missing direccion counts as a value here (`NULLS NOT DISTINCT`, Postgres 15+),
//! so `("X", NULL)` can exist only once.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tienda_nombre_direccion")
                    .table(Tienda::Table)
                    .col(Tienda::Nombre)
                    .col(Tienda::Direccion)
                    .unique()
                    .nulls_not_distinct()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_tienda_nombre_direccion").table(Tienda::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tienda { Table, Nombre, Direccion }
