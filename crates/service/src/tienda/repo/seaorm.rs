use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::tienda::domain::Tienda;
use crate::tienda::repository::TiendaRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmTiendaRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmTiendaRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl TiendaRepository for SeaOrmTiendaRepository {
    async fn find_all(&self) -> Result<Vec<Tienda>, ServiceError> {
        let rows = models::tienda::list(&self.db).await?;
        Ok(rows.into_iter().map(Tienda::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tienda>, ServiceError> {
        Ok(models::tienda::find(&self.db, id).await?.map(Tienda::from))
    }

    async fn find_by_nombre_and_direccion(&self, nombre: &str, direccion: Option<&str>) -> Result<Option<Tienda>, ServiceError> {
        let found = models::tienda::find_by_nombre_and_direccion(&self.db, nombre, direccion).await?;
        Ok(found.map(Tienda::from))
    }

    async fn insert(&self, nombre: &str, direccion: Option<&str>) -> Result<Tienda, ServiceError> {
        let created = models::tienda::create(&self.db, nombre, direccion).await?;
        Ok(created.into())
    }

    async fn update(&self, tienda: &Tienda) -> Result<Tienda, ServiceError> {
        let current: models::tienda::Model = tienda.clone().into();
        let updated = models::tienda::replace(&self.db, current, &tienda.nombre, tienda.direccion.as_deref())
            .await
            .map_err(|e| match ServiceError::from(e) {
                ServiceError::NotFound(_) => ServiceError::not_found("Tienda", tienda.id_tienda),
                other => other,
            })?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(models::tienda::delete(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{db_tests_disabled, get_db};
    use uuid::Uuid;

    #[tokio::test]
    async fn seaorm_repository_round_trip() -> Result<(), anyhow::Error> {
        if db_tests_disabled() { return Ok(()); }
        let repo = SeaOrmTiendaRepository::new(get_db().await?);

        let nombre = format!("svc_tienda_{}", Uuid::new_v4());
        let t = repo.insert(&nombre, Some("Av. Siempre Viva 742")).await?;
        assert_eq!(repo.find_by_id(t.id_tienda).await?, Some(t.clone()));
        assert!(repo.find_all().await?.iter().any(|x| x.id_tienda == t.id_tienda));

        let dup = repo.insert(&nombre, Some("Av. Siempre Viva 742")).await;
        assert!(matches!(dup, Err(ServiceError::Integrity(_))));

        let moved = Tienda { direccion: Some("Calle Falsa 123".into()), ..t.clone() };
        assert_eq!(repo.update(&moved).await?, moved);
        assert!(repo.find_by_nombre_and_direccion(&nombre, Some("Calle Falsa 123")).await?.is_some());

        assert!(repo.delete(t.id_tienda).await?);
        assert!(repo.find_by_id(t.id_tienda).await?.is_none());

        let gone = repo.update(&moved).await;
        assert!(matches!(gone, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
