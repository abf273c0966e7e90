use async_trait::async_trait;

use super::domain::Tienda;
use crate::errors::ServiceError;

/// Repository abstraction for store persistence.
///
/// Implementations must report a write that breaks the (nombre, direccion)
/// uniqueness rule as `ServiceError::Integrity`.
#[async_trait]
pub trait TiendaRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Tienda>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Tienda>, ServiceError>;
    async fn find_by_nombre_and_direccion(&self, nombre: &str, direccion: Option<&str>) -> Result<Option<Tienda>, ServiceError>;
    async fn insert(&self, nombre: &str, direccion: Option<&str>) -> Result<Tienda, ServiceError>;
    async fn update(&self, tienda: &Tienda) -> Result<Tienda, ServiceError>;
    /// Returns true when a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i32, Tienda>, // key: id_tienda
        last_id: i32,
        writes: usize,
    }

    /// Behaves like the `tienda` table: serial ids and a unique
    /// (nombre, direccion) index.
    #[derive(Default)]
    pub struct MockTiendaRepository {
        state: Mutex<State>,
    }

    impl MockTiendaRepository {
        /// Number of successful inserts, updates and deletes so far.
        pub fn write_count(&self) -> usize {
            self.state.lock().unwrap().writes
        }

        pub fn len(&self) -> usize {
            self.state.lock().unwrap().rows.len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    fn pair_taken(rows: &BTreeMap<i32, Tienda>, skip_id: Option<i32>, nombre: &str, direccion: Option<&str>) -> bool {
        rows.values()
            .any(|t| Some(t.id_tienda) != skip_id && t.nombre == nombre && t.direccion.as_deref() == direccion)
    }

    #[async_trait]
    impl TiendaRepository for MockTiendaRepository {
        async fn find_all(&self) -> Result<Vec<Tienda>, ServiceError> {
            Ok(self.state.lock().unwrap().rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Tienda>, ServiceError> {
            Ok(self.state.lock().unwrap().rows.get(&id).cloned())
        }

        async fn find_by_nombre_and_direccion(&self, nombre: &str, direccion: Option<&str>) -> Result<Option<Tienda>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.values()
                .find(|t| t.nombre == nombre && t.direccion.as_deref() == direccion)
                .cloned())
        }

        async fn insert(&self, nombre: &str, direccion: Option<&str>) -> Result<Tienda, ServiceError> {
            let mut state = self.state.lock().unwrap();
            if pair_taken(&state.rows, None, nombre, direccion) {
                return Err(ServiceError::Integrity("idx_tienda_nombre_direccion".into()));
            }
            state.last_id += 1;
            let t = Tienda { id_tienda: state.last_id, nombre: nombre.to_string(), direccion: direccion.map(str::to_string) };
            state.rows.insert(t.id_tienda, t.clone());
            state.writes += 1;
            Ok(t)
        }

        async fn update(&self, tienda: &Tienda) -> Result<Tienda, ServiceError> {
            let mut state = self.state.lock().unwrap();
            if !state.rows.contains_key(&tienda.id_tienda) {
                return Err(ServiceError::not_found("Tienda", tienda.id_tienda));
            }
            if pair_taken(&state.rows, Some(tienda.id_tienda), &tienda.nombre, tienda.direccion.as_deref()) {
                return Err(ServiceError::Integrity("idx_tienda_nombre_direccion".into()));
            }
            state.rows.insert(tienda.id_tienda, tienda.clone());
            state.writes += 1;
            Ok(tienda.clone())
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut state = self.state.lock().unwrap();
            let removed = state.rows.remove(&id).is_some();
            if removed {
                state.writes += 1;
            }
            Ok(removed)
        }
    }
}
