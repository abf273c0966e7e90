use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use models::db::{connect_with_config, DatabaseConfig};
use service::{
    seed,
    tienda::{repo::seaorm::SeaOrmTiendaRepository, repository::TiendaRepository, TiendaService},
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::hateoas::RouteTable;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config.toml, falling back to environment variables when the file is
/// missing or invalid.
fn load_config() -> Result<AppConfig, StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(file_err) => {
            warn!(error = %file_err, "config file unusable; using environment");
            AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
        }
    }
}

fn bind_addr(cfg: &configs::ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.host, cfg.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address {}:{}: {}", cfg.host, cfg.port, e)))
}

/// Wire repository, service and router for an already-loaded config.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    models::db::test_connection(&db)
        .await
        .map_err(|e| StartupError::Runtime(format!("database unreachable: {e}")))?;

    if cfg.database.auto_migrate {
        Migrator::up(&db, None).await?;
        info!(event = "migrated", "schema up to date");
    }

    let repo: Arc<dyn TiendaRepository> = Arc::new(SeaOrmTiendaRepository::new(db));
    let tiendas = Arc::new(TiendaService::new(repo));

    if cfg.seed.enabled {
        seed::seed_if_empty(tiendas.as_ref(), cfg.seed.count).await?;
    }

    let state = ServerState::new(tiendas, RouteTable::new(cfg.server.public_base_url()));
    Ok(routes::build_router(state, build_cors()))
}

/// Public entry: build the app and serve until `shutdown` resolves.
pub async fn run_until<F>(shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    dotenv().ok();
    init_logging_from_env();

    let cfg = load_config()?;
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, public_url = %cfg.server.public_base_url(), "starting tienda api");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("http server drained");
    Ok(())
}

/// Serve until the process receives Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    run_until(async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}
