use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Router wired to a SeaORM-backed repository on `db`.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::from_db(db), build_cors())
}

/// Public entry: prepare the store, then serve HTTP until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    service::runtime::ensure_env(&cfg.database.url).await?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::ensure_schema(&db).await?;

    let app = build_app(db.clone());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting company registry");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    db.close().await?;
    Ok(())
}
