use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::{header, StatusCode},
    Json,
};
use service::tienda::domain::{Tienda, TiendaInput};
use tracing::info;

use crate::errors::{map_service_error, JsonApiError, Operation};
use crate::hateoas::{CollectionModel, EntityModel};
use crate::routes::ServerState;

type Created = (StatusCode, [(header::HeaderName, String); 1], Json<EntityModel<Tienda>>);

fn parse_id(op: Operation, path: Result<Path<i32>, PathRejection>) -> Result<i32, JsonApiError> {
    path.map(|Path(id)| id).map_err(|e| {
        let prefix = if op == Operation::Update { "Error al actualizar la tienda" } else { "ID inválido" };
        JsonApiError::bad_request(format!("{}: {}", prefix, e.body_text()))
    })
}

fn parse_body(op: Operation, body: Result<Json<TiendaInput>, JsonRejection>) -> Result<TiendaInput, JsonApiError> {
    body.map(|Json(input)| input).map_err(|e| {
        let prefix = if op == Operation::Create { "Error al crear la tienda" } else { "Error al actualizar la tienda" };
        JsonApiError::bad_request(format!("{}: {}", prefix, e.body_text()))
    })
}

#[utoipa::path(
    get, path = "/api/v1/tiendas", tag = "tienda",
    responses(
        (status = 200, description = "Lista devuelta correctamente"),
        (status = 500, description = "Error interno")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<CollectionModel<EntityModel<Tienda>>>, JsonApiError> {
    let tiendas = state.tiendas.list_all().await.map_err(|e| map_service_error(Operation::List, None, &e))?;
    info!(count = tiendas.len(), "list tiendas");
    Ok(Json(state.routes.tienda_collection(tiendas)))
}

#[utoipa::path(
    get, path = "/api/v1/tiendas/{id}", tag = "tienda",
    params(("id" = i32, Path, description = "ID de la tienda")),
    responses(
        (status = 200, description = "Tienda encontrada", body = crate::openapi::TiendaDoc),
        (status = 404, description = "Tienda no encontrada")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<EntityModel<Tienda>>, JsonApiError> {
    let id = parse_id(Operation::Get, path)?;
    let tienda = state.tiendas.get_by_id(id).await.map_err(|e| map_service_error(Operation::Get, Some(id), &e))?;
    Ok(Json(state.routes.tienda_model(tienda)))
}

#[utoipa::path(
    post, path = "/api/v1/tiendas", tag = "tienda",
    request_body = crate::openapi::TiendaDoc,
    responses(
        (status = 201, description = "Tienda creada exitosamente", body = crate::openapi::TiendaDoc),
        (status = 400, description = "Datos inválidos"),
        (status = 409, description = "Conflicto de integridad de datos")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<TiendaInput>, JsonRejection>,
) -> Result<Created, JsonApiError> {
    let input = parse_body(Operation::Create, body)?;
    let created = state.tiendas.create(input).await.map_err(|e| map_service_error(Operation::Create, None, &e))?;
    let location = state.routes.item_url(created.id_tienda);
    info!(id = created.id_tienda, %location, "created tienda");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(state.routes.tienda_model(created))))
}

#[utoipa::path(
    put, path = "/api/v1/tiendas/{id}", tag = "tienda",
    params(("id" = i32, Path, description = "ID de la tienda")),
    request_body = crate::openapi::TiendaDoc,
    responses(
        (status = 200, description = "Tienda actualizada exitosamente", body = crate::openapi::TiendaDoc),
        (status = 404, description = "Tienda no encontrada"),
        (status = 400, description = "Datos inválidos")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    body: Result<Json<TiendaInput>, JsonRejection>,
) -> Result<Json<EntityModel<Tienda>>, JsonApiError> {
    let id = parse_id(Operation::Update, path)?;
    let input = parse_body(Operation::Update, body)?;
    let updated = state.tiendas.update(id, input).await.map_err(|e| map_service_error(Operation::Update, Some(id), &e))?;
    info!(id, "updated tienda");
    Ok(Json(state.routes.tienda_model(updated)))
}

#[utoipa::path(
    delete, path = "/api/v1/tiendas/{id}", tag = "tienda",
    params(("id" = i32, Path, description = "ID de la tienda")),
    responses(
        (status = 204, description = "Tienda eliminada exitosamente"),
        (status = 404, description = "Tienda no encontrada"),
        (status = 500, description = "Error interno")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let id = parse_id(Operation::Delete, path)?;
    state.tiendas.delete(id).await.map_err(|e| map_service_error(Operation::Delete, Some(id), &e))?;
    info!(id, "deleted tienda");
    Ok(StatusCode::NO_CONTENT)
}
