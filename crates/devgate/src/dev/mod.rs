//! HTTP server shared by `devgate dev` and `devgate preview`.
//!
//! Serves the configured root directory with:
//! - The client environment module at `/@env`
//! - Optional SPA fallback to `index.html`
//! - The Chrome 129 request guard (dev server only)

pub mod server;

pub use server::{bind, build_router, serve, AppState, DevServer, ServerKind, PORT_ATTEMPTS};
