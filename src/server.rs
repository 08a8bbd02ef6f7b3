use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::protocol::{
    ApiError, Command, ENDPOINT_STORE, GetCmd, GetResponse, SetCmd, SetRequest, SetResponse,
};
use crate::store::Store;

/// HTTP server
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    store: Arc<Store>,
}

impl Server {
    /// Create and bind the server to the specified address
    pub async fn bind(addr: &str) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        let local_addr = listener.local_addr()?;
        info!("HTTP server bound to {}", local_addr);

        Ok(Self {
            listener,
            local_addr,
            store: Arc::new(Store::new()),
        })
    }

    /// Get local listening address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve requests until a shutdown signal arrives
    pub async fn run(self) -> std::io::Result<()> {
        info!("Server started, listening on {}", self.local_addr);

        let app = router(Arc::clone(&self.store));
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped, {} keys dropped", self.store.len().await);
        Ok(())
    }
}

/// Build the HTTP routes over a shared store
pub fn router(store: Arc<Store>) -> Router {
    Router::new()
        .route(ENDPOINT_STORE, post(handle_set))
        .route(&format!("{}/:key", ENDPOINT_STORE), get(handle_get))
        .layer(Extension(store))
}

async fn handle_set(
    Extension(store): Extension<Arc<Store>>,
    body: Result<Json<SetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SetResponse>), ApiError> {
    let Json(req) = body.map_err(|rejection| {
        warn!("Rejected write body: {}", rejection.body_text());
        ApiError::validation(rejection.body_text())
    })?;

    let cmd = SetCmd::parse(req).inspect_err(|e| warn!("Invalid write request: {}", e))?;
    let resp = cmd.execute(&store).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

async fn handle_get(
    Extension(store): Extension<Arc<Store>>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>, ApiError> {
    let cmd = GetCmd::parse(&key)?;
    cmd.execute(&store).await.map(Json)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
