use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Store as sent and returned by the API; `idTienda` is ignored on input.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TiendaDoc {
    #[schema(example = 1)]
    pub id_tienda: Option<i32>,
    #[schema(example = "Tienda A", max_length = 255)]
    pub nombre: String,
    #[schema(example = "Dirección A", max_length = 500)]
    pub direccion: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "API de Tiendas", description = "API para gestionar tiendas."),
    paths(
        crate::routes::health,
        crate::routes::tiendas::list,
        crate::routes::tiendas::get,
        crate::routes::tiendas::create,
        crate::routes::tiendas::update,
        crate::routes::tiendas::delete,
    ),
    components(
        schemas(
            HealthResponse,
            TiendaDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "tienda", description = "API para gestionar tiendas.")
    )
)]
pub struct ApiDoc;
