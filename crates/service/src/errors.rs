use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The (nombre, direccion) lookup found an existing row before insert.
    #[error("duplicate: {0}")]
    Duplicate(String),
    /// The database unique index rejected the write.
    #[error("integrity violation: {0}")]
    Integrity(String),
    #[error("database error: {0}")]
    Db(String),
}

/// Coarse classification consumed by the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{} no encontrada con ID: {}", entity, id))
    }

    pub fn duplicate() -> Self {
        Self::Duplicate("Ya existe una tienda con ese nombre y dirección".into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) => ErrorKind::Validation,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::Duplicate(_) | ServiceError::Integrity(_) => ErrorKind::Conflict,
            ServiceError::Db(_) => ErrorKind::Internal,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::UniqueViolation(msg) => ServiceError::Integrity(msg),
            ModelError::RecordNotFound => ServiceError::NotFound("registro no encontrado".into()),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
