//! Migrator registering the store schema.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_tienda;
mod m20240501_000002_add_tienda_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_tienda::Migration),
            // Indexes should always be applied last
            Box::new(m20240501_000002_add_tienda_indexes::Migration),
        ]
    }
}
