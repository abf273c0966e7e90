use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

const SERVICE: &str = "tienda-api";

/// 优先 config.toml，其次环境变量 TOKIO_WORKER_THREADS
fn worker_threads() -> Option<usize> {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.server.worker_threads,
        Err(_) => std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()),
    }
}

async fn shutdown_signal(instance: Uuid) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(service = SERVICE, event = "signal_error", error = %e, "ctrl_c listener failed; shutting down");
        return;
    }
    info!(service = SERVICE, event = "shutdown_signal", %instance, "received Ctrl+C, draining connections");
}

fn main() -> ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    let instance = Uuid::new_v4();
    let pid = std::process::id();

    std::panic::set_hook(Box::new(move |info| {
        error!(service = SERVICE, event = "panic", %instance, pid, message = %info, "unhandled panic");
    }));

    let threads = worker_threads();
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(n) = threads {
        builder.worker_threads(n);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = SERVICE, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service = SERVICE,
        event = "start",
        %instance,
        pid,
        version = env!("CARGO_PKG_VERSION"),
        threads = threads.unwrap_or_default(),
        "tienda api starting"
    );

    match rt.block_on(server::run_until(shutdown_signal(instance))) {
        Ok(()) => {
            info!(service = SERVICE, event = "stop", %instance, "tienda api stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = SERVICE, event = "run_failed", error = %e, "tienda api exited with error");
            ExitCode::FAILURE
        }
    }
}
