//! Router construction, port binding and the serve loop.

use crate::config::{DevgateConfig, ServerConfig};
use crate::env::ENV_MODULE_PATH;
use crate::error::{CliError, Result};
use crate::guard;
use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Ports tried after the requested one when `strictPort` is off.
pub const PORT_ATTEMPTS: u16 = 10;

/// Which server is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKind {
    /// Local development server; runs the request guard
    Dev,
    /// Serves production output as-is
    Preview,
}

impl ServerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerKind::Dev => "dev",
            ServerKind::Preview => "preview",
        }
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    root: Arc<PathBuf>,
    env_module: Arc<str>,
}

impl AppState {
    pub fn new(root: PathBuf, env_module: impl Into<Arc<str>>) -> Self {
        Self {
            root: Arc::new(root),
            env_module: env_module.into(),
        }
    }
}

/// A configured server, ready to bind.
pub struct DevServer {
    config: DevgateConfig,
    kind: ServerKind,
    state: AppState,
}

impl DevServer {
    pub fn new(config: DevgateConfig, kind: ServerKind, env_module: String) -> Self {
        let state = AppState::new(config.root.clone(), env_module);
        Self {
            config,
            kind,
            state,
        }
    }

    pub fn config(&self) -> &DevgateConfig {
        &self.config
    }

    pub fn kind(&self) -> ServerKind {
        self.kind
    }

    /// Whether requests pass through the request guard.
    ///
    /// Only the dev server runs it; preview mirrors production.
    pub fn guard_enabled(&self) -> bool {
        self.kind == ServerKind::Dev && self.config.guard.enabled
    }

    pub fn router(&self) -> Router {
        build_router(&self.config, self.state.clone(), self.guard_enabled())
    }

    /// Bind the listener according to the port policy.
    pub async fn bind(&self) -> Result<TcpListener> {
        bind(&self.config.server).await
    }
}

/// Build the axum router.
///
/// Layer order, outermost first: tracing, request guard, CORS, routes. The
/// guard sits outside CORS so preflight requests are guarded too.
pub fn build_router(config: &DevgateConfig, state: AppState, guard: bool) -> Router {
    let static_files = ServeDir::new(&config.root);

    let router = Router::new()
        .route(ENV_MODULE_PATH, get(handle_env_module))
        .route("/favicon.ico", get(handle_favicon));

    let router = if config.spa_fallback {
        router.fallback_service(
            static_files.fallback(ServeFile::new(config.root.join("index.html"))),
        )
    } else {
        router.fallback_service(static_files)
    };

    let mut router = router.with_state(state).layer(
        // CORS: allow all origins for local development
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    if guard {
        router = router.layer(middleware::from_fn(guard::request_guard));
    }

    router.layer(TraceLayer::new_for_http())
}

/// Serve the client environment module.
async fn handle_env_module(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/javascript"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        state.env_module.to_string(),
    )
        .into_response()
}

/// Serve root/favicon.ico, or 204 No Content so browsers stop asking.
async fn handle_favicon(State(state): State<AppState>) -> Response {
    match tokio::fs::read(state.root.join("favicon.ico")).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "image/x-icon")],
            Body::from(bytes),
        )
            .into_response(),
        Err(_) => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Bind a listener for `server`.
///
/// With `strictPort` the requested port is the only candidate. Otherwise the
/// next [`PORT_ATTEMPTS`] ports are tried in order.
pub async fn bind(server: &ServerConfig) -> Result<TcpListener> {
    let requested = server.port;

    if requested < 1024 {
        crate::ui::warning(&format!(
            "Port {} is in privileged range, may require root access",
            requested
        ));
    }

    let attempts = if server.strict_port { 0 } else { PORT_ATTEMPTS };

    for offset in 0..=attempts {
        let Some(port) = requested.checked_add(offset) else {
            break;
        };
        let addr = server.socket_addr(port)?;

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                if offset > 0 {
                    crate::ui::warning(&format!(
                        "Port {} is busy, using port {} instead",
                        requested, port
                    ));
                }
                tracing::debug!(%addr, "bound listener");
                return Ok(listener);
            }
            Err(e) if e.kind() == ErrorKind::AddrInUse => {
                tracing::debug!(port, "port in use");
                continue;
            }
            Err(e) => {
                return Err(CliError::Server(format!("Failed to bind to {}: {}", addr, e)));
            }
        }
    }

    if server.strict_port {
        Err(CliError::PortInUse { port: requested })
    } else {
        Err(CliError::Server(format!(
            "Ports {}-{} are all in use. Try a different port range.",
            requested,
            requested.saturating_add(attempts)
        )))
    }
}

/// Run the server until Ctrl+C.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CliError::Server(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {}", e);
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    crate::ui::info("Shutting down...");
}
