use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::{ErrorKind, ServiceError};
use thiserror::Error;
use tracing::{error, warn};

/// JSON error body: `{"error": <title>, "message": <detail>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, message: Option<String>) -> Self {
        Self { status, title, message }
    }

    pub fn bad_request(message: String) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(message))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

/// Store endpoint an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Message used when the failure is reported without its detail.
    fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Error interno al listar las tiendas",
            Operation::Get => "Error interno al obtener la tienda",
            Operation::Create => "Error al crear la tienda",
            Operation::Update => "Error al actualizar la tienda",
            Operation::Delete => "Error interno al eliminar la tienda",
        }
    }
}

/// Status table for (operation, error kind). Kinds an operation does not list
/// fall back to its least specific category: 400 for writes that carry a
/// body, 500 otherwise.
pub fn status_for(op: Operation, kind: ErrorKind) -> (StatusCode, &'static str) {
    use ErrorKind as K;
    use Operation as O;
    match (op, kind) {
        (O::Get | O::Update | O::Delete, K::NotFound) => (StatusCode::NOT_FOUND, "Not Found"),
        (O::Create, K::Conflict) => (StatusCode::CONFLICT, "Conflict"),
        (O::Create | O::Update, _) => (StatusCode::BAD_REQUEST, "Bad Request"),
        (O::List | O::Get | O::Delete, _) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
    }
}

/// Text safe to hand to clients; database errors stay in the logs.
fn public_detail(err: &ServiceError) -> Option<String> {
    match err {
        ServiceError::Validation(msg) | ServiceError::Duplicate(msg) => Some(msg.clone()),
        ServiceError::Integrity(_) => Some("ya existe una tienda con ese nombre y dirección".into()),
        ServiceError::NotFound(msg) => Some(msg.clone()),
        ServiceError::Db(_) => None,
    }
}

/// Translate a service failure for `op` into the response the client sees.
pub fn map_service_error(op: Operation, id: Option<i32>, err: &ServiceError) -> JsonApiError {
    let (status, title) = status_for(op, err.kind());
    let message = match status {
        StatusCode::NOT_FOUND => match id {
            Some(id) => format!("Tienda no encontrada con ID: {id}"),
            None => "Tienda no encontrada".to_string(),
        },
        StatusCode::CONFLICT => format!(
            "Error de integridad de datos: {}",
            public_detail(err).unwrap_or_default()
        ),
        StatusCode::BAD_REQUEST => match public_detail(err) {
            Some(detail) => format!("{}: {}", op.failure_message(), detail),
            None => op.failure_message().to_string(),
        },
        _ => op.failure_message().to_string(),
    };

    if status.is_server_error() || err.kind() == ErrorKind::Internal {
        error!(operation = ?op, id, error = %err, "tienda_request_failed");
    } else {
        warn!(operation = ?op, id, status = status.as_u16(), error = %err, "tienda_request_rejected");
    }
    JsonApiError::new(status, title, Some(message))
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table_matches_endpoint_contract() {
        use ErrorKind as K;
        use Operation as O;
        assert_eq!(status_for(O::Get, K::NotFound).0, StatusCode::NOT_FOUND);
        assert_eq!(status_for(O::Get, K::Internal).0, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_for(O::List, K::Internal).0, StatusCode::INTERNAL_SERVER_ERROR);

        assert_eq!(status_for(O::Create, K::Conflict).0, StatusCode::CONFLICT);
        assert_eq!(status_for(O::Create, K::Validation).0, StatusCode::BAD_REQUEST);
        assert_eq!(status_for(O::Create, K::Internal).0, StatusCode::BAD_REQUEST);

        assert_eq!(status_for(O::Update, K::NotFound).0, StatusCode::NOT_FOUND);
        assert_eq!(status_for(O::Update, K::Conflict).0, StatusCode::BAD_REQUEST);
        assert_eq!(status_for(O::Update, K::Internal).0, StatusCode::BAD_REQUEST);

        assert_eq!(status_for(O::Delete, K::NotFound).0, StatusCode::NOT_FOUND);
        assert_eq!(status_for(O::Delete, K::Internal).0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_message_names_the_id() {
        let e = map_service_error(Operation::Get, Some(5), &ServiceError::not_found("Tienda", 5));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.message.as_deref(), Some("Tienda no encontrada con ID: 5"));
    }

    #[test]
    fn both_conflict_sources_map_to_409_on_create() {
        let pre = map_service_error(Operation::Create, None, &ServiceError::duplicate());
        let race = map_service_error(Operation::Create, None, &ServiceError::Integrity("duplicate key value violates unique constraint".into()));
        assert_eq!(pre.status, StatusCode::CONFLICT);
        assert_eq!(race.status, StatusCode::CONFLICT);
        assert!(!race.message.unwrap().contains("duplicate key"));
    }

    #[test]
    fn internal_details_are_not_leaked() {
        let err = ServiceError::Db("password authentication failed for user postgres".into());
        let e = map_service_error(Operation::Delete, Some(1), &err);
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message.as_deref(), Some("Error interno al eliminar la tienda"));

        let e = map_service_error(Operation::Create, None, &err);
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message.as_deref(), Some("Error al crear la tienda"));
    }

    #[test]
    fn validation_detail_is_reported() {
        let e = map_service_error(Operation::Update, Some(1), &ServiceError::Validation("nombre es obligatorio".into()));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.message.as_deref(), Some("Error al actualizar la tienda: nombre es obligatorio"));
    }
}
