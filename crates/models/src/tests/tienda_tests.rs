use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use uuid::Uuid;

use crate::{db::connect, errors::ModelError, tienda};

use super::db_tests_disabled;

#[tokio::test]
async fn test_tienda_crud() -> Result<()> {
    if db_tests_disabled() { return Ok(()); }
    let db = connect().await?;
    Migrator::up(&db, None).await?;

    let nombre = format!("Tienda {}", Uuid::new_v4());
    let created = tienda::create(&db, &nombre, Some("Calle 1")).await?;
    assert!(created.id_tienda > 0);

    let found = tienda::find(&db, created.id_tienda).await?.unwrap();
    assert_eq!(found, created);

    let by_pair = tienda::find_by_nombre_and_direccion(&db, &nombre, Some("Calle 1")).await?;
    assert_eq!(by_pair.map(|t| t.id_tienda), Some(created.id_tienda));
    assert!(tienda::find_by_nombre_and_direccion(&db, &nombre, None).await?.is_none());

    let replaced = tienda::replace(&db, found, &nombre, None).await?;
    assert_eq!(replaced.id_tienda, created.id_tienda);
    assert_eq!(replaced.direccion, None);
    assert!(tienda::find_by_nombre_and_direccion(&db, &nombre, None).await?.is_some());

    assert!(tienda::delete(&db, created.id_tienda).await?);
    assert!(!tienda::delete(&db, created.id_tienda).await?);
    assert!(tienda::find(&db, created.id_tienda).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_unique_nombre_direccion() -> Result<()> {
    if db_tests_disabled() { return Ok(()); }
    let db = connect().await?;
    Migrator::up(&db, None).await?;

    let nombre = format!("Tienda {}", Uuid::new_v4());
    let first = tienda::create(&db, &nombre, Some("Dirección A")).await?;
    // same pair must trip the unique index
    let dup = tienda::create(&db, &nombre, Some("Dirección A")).await;
    assert!(matches!(dup, Err(ModelError::UniqueViolation(_))));

    tienda::delete(&db, first.id_tienda).await?;
    Ok(())
}

#[tokio::test]
async fn test_unique_nombre_without_direccion() -> Result<()> {
    if db_tests_disabled() { return Ok(()); }
    let db = connect().await?;
    Migrator::up(&db, None).await?;

    let nombre = format!("Tienda {}", Uuid::new_v4());
    let first = tienda::create(&db, &nombre, None).await?;
    let dup = tienda::create(&db, &nombre, None).await;
    assert!(matches!(dup, Err(ModelError::UniqueViolation(_))));

    // replacing another row onto (nombre, NULL) trips the same index
    let other = tienda::create(&db, &nombre, Some("Calle 2")).await?;
    let clash = tienda::replace(&db, other.clone(), &nombre, None).await;
    assert!(matches!(clash, Err(ModelError::UniqueViolation(_))));

    tienda::delete(&db, first.id_tienda).await?;
    tienda::delete(&db, other.id_tienda).await?;
    Ok(())
}
