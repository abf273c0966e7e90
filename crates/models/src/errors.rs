use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    /// A unique index rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    /// An update matched no row.
    #[error("record not found")]
    RecordNotFound,
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        if matches!(e, DbErr::RecordNotUpdated) {
            return ModelError::RecordNotFound;
        }
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ModelError::UniqueViolation(msg),
            _ => ModelError::Db(e.to_string()),
        }
    }
}
