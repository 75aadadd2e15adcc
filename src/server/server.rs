//! HTTP server assembly: router, CORS, bind and serve.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::observability::Logger;
use crate::store::{DocumentStore, MongoStore};

use super::config::ServerConfig;
use super::routes::{api_routes, AppState};

/// HTTP server for the request-intake API.
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Creates a server around an injected document store.
    pub fn new(config: ServerConfig, store: Arc<dyn DocumentStore>) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    fn build_router(store: Arc<dyn DocumentStore>) -> Router {
        let state = Arc::new(AppState::new(store));

        // Any origin with credentials enabled: `Any` cannot be combined
        // with allow_credentials(true), so mirror the request instead
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true);

        api_routes(state).layer(cors)
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for tests driving it directly).
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds the listener and serves until the process is stopped.
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        Logger::info("server_started", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// Loads configuration from the environment, connects the store, and
/// serves until stopped.
pub async fn run() -> io::Result<()> {
    let config = ServerConfig::from_env();
    let store = MongoStore::connect(
        config.database_url.as_deref(),
        config.database_name.as_deref(),
    )
    .await;

    HttpServer::new(config, Arc::new(store)).start().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_server_reports_configured_addr() {
        let server = HttpServer::new(ServerConfig::with_port(8080), Arc::new(MemoryStore::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(ServerConfig::default(), Arc::new(MemoryStore::new()));
        let _router = server.router();
    }
}
