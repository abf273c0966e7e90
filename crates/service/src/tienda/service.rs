use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::{Tienda, TiendaInput};
use super::repository::TiendaRepository;
use crate::errors::ServiceError;

/// Store business service independent of web framework.
///
/// Every mutation goes through here: existence checks, the duplicate
/// (nombre, direccion) rule on create, and whole-record replacement on update.
pub struct TiendaService<R: TiendaRepository + ?Sized = dyn TiendaRepository> {
    repo: Arc<R>,
}

impl<R: TiendaRepository + ?Sized> TiendaService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_all(&self) -> Result<Vec<Tienda>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Tienda, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tienda", id))
    }

    /// Create a store, rejecting an existing (nombre, direccion) pair.
    ///
    /// # Examples
    /// ```
    /// use service::tienda::{TiendaService, domain::TiendaInput, repository::mock::MockTiendaRepository};
    /// use std::sync::Arc;
    /// let svc = TiendaService::new(Arc::new(MockTiendaRepository::default()));
    /// let t = tokio_test::block_on(svc.create(TiendaInput::new("Tienda A", Some("Dirección A")))).unwrap();
    /// assert_eq!(t.id_tienda, 1);
    /// let dup = tokio_test::block_on(svc.create(TiendaInput::new("Tienda A", Some("Dirección A"))));
    /// assert!(dup.is_err());
    /// ```
    #[instrument(skip(self, input), fields(nombre = %input.nombre))]
    pub async fn create(&self, input: TiendaInput) -> Result<Tienda, ServiceError> {
        input.validate()?;
        let direccion = input.direccion.as_deref();
        if let Some(existing) = self.repo.find_by_nombre_and_direccion(&input.nombre, direccion).await? {
            debug!(existing_id = existing.id_tienda, "tienda already exists");
            return Err(ServiceError::duplicate());
        }

        // The lookup above is not atomic with the insert; a concurrent create
        // of the same pair comes back from the unique index as Integrity.
        let created = self.repo.insert(&input.nombre, direccion).await.map_err(|e| {
            if matches!(e, ServiceError::Integrity(_)) {
                warn!(error = %e, "tienda_insert_lost_race");
            }
            e
        })?;
        info!(id = created.id_tienda, "tienda_created");
        Ok(created)
    }

    /// Replace nombre and direccion of an existing store; the id never changes.
    #[instrument(skip(self, input), fields(id = id, nombre = %input.nombre))]
    pub async fn update(&self, id: i32, input: TiendaInput) -> Result<Tienda, ServiceError> {
        let mut tienda = self.get_by_id(id).await?;
        input.validate()?;
        tienda.nombre = input.nombre;
        tienda.direccion = input.direccion;
        // TODO: confirm whether update should run the same (nombre, direccion)
        // duplicate lookup as create; today only the unique index guards it.
        let updated = self.repo.update(&tienda).await?;
        info!(id = updated.id_tienda, "tienda_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let tienda = self.get_by_id(id).await?;
        if !self.repo.delete(tienda.id_tienda).await? {
            // removed by someone else between the lookup and the delete
            return Err(ServiceError::not_found("Tienda", id));
        }
        info!(id, "tienda_deleted");
        Ok(())
    }
}
