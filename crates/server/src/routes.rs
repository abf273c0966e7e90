use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::tienda::TiendaService;

use crate::hateoas::{RouteTable, TIENDAS_PATH};
use crate::openapi::ApiDoc;

pub mod tiendas;

/// Shared handler state: the store service plus the link table.
#[derive(Clone)]
pub struct ServerState {
    pub tiendas: Arc<TiendaService>,
    pub routes: Arc<RouteTable>,
}

impl ServerState {
    pub fn new(tiendas: Arc<TiendaService>, routes: RouteTable) -> Self {
        Self { tiendas, routes: Arc::new(routes) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, store API and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let item_path = format!("{TIENDAS_PATH}/:id");
    let api = Router::new()
        .route(TIENDAS_PATH, get(tiendas::list).post(tiendas::create))
        .route(&item_path, get(tiendas::get).put(tiendas::update).delete(tiendas::delete));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
