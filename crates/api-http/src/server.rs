//! HTTP Server

use crate::routes::create_router;
use mediaq_core::application::{QueueService, ShutdownToken};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
const DEFAULT_HTTP_PORT: u16 = 5000;

/// HTTP Server Configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl HttpServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// HTTP Server
pub struct HttpServer {
    config: HttpServerConfig,
    service: Arc<QueueService>,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, service: Arc<QueueService>) -> Self {
        Self { config, service }
    }

    /// Bind the listener without serving yet
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind(self.config.addr()).await
    }

    /// Serve on `listener` until `shutdown` fires
    ///
    /// In-flight requests are allowed to finish.
    pub async fn serve(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownToken,
    ) -> std::io::Result<()> {
        let local: SocketAddr = listener.local_addr()?;
        info!(addr = %local, "HTTP server listening");

        axum::serve(listener, create_router(self.service))
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Bind and serve
    pub async fn run(self, shutdown: ShutdownToken) -> std::io::Result<()> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediaq_core::application::shutdown_channel;
    use mediaq_core::port::{InMemoryQueueStore, UuidProvider};
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:5000");
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let service = Arc::new(QueueService::new(
            Arc::new(InMemoryQueueStore::new()),
            Arc::new(UuidProvider),
        ));
        let server = HttpServer::new(
            HttpServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            service,
        );
        let listener = server.bind().await.unwrap();
        let (tx, token) = shutdown_channel();

        let handle = tokio::spawn(server.serve(listener, token));
        tx.shutdown();

        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("server should stop after shutdown")
            .unwrap()
            .unwrap();
    }
}
