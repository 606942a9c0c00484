//! HTTP front end for brandkit
mod api;

use actix_web::{
    dev::{Server, ServerHandle},
    error::JsonPayloadError,
    middleware::{Logger, NormalizePath},
    web::{self, Data},
    App, HttpRequest, HttpServer,
};
use async_trait::async_trait;
use brandkit_error::{init::InitContextError, web::WebError, BKError, BKResult};
use brandkit_models::{settings::Settings, DbManager, WebServer};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Rejects malformed JSON bodies with the standard error body.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    WebError::BadRequest(err.to_string()).into()
}

/// Registers state, public routes and the prefixed API on an app.
///
/// Shared by the server factory and the integration tests.
pub fn configure_app(state: AppState, router_prefix: &str) -> impl Fn(&mut web::ServiceConfig) {
    let state = Data::new(Arc::new(state));
    let router_prefix = router_prefix.to_string();
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(state.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            // Public root routes (not under `/api`).
            .configure(api::configure_public_routes)
            .service(web::scope(&router_prefix).configure(api::configure_routes));
    }
}

/// BKWebServer handles the web server initialization and management
#[derive(Clone)]
pub struct BKWebServer {
    /// Server handle for graceful shutdown
    server: Arc<Mutex<Option<ServerHandle>>>,
}

impl BKWebServer {
    /// Create and configure the HTTP server
    fn create_server(settings: &Settings, db_manager: Arc<dyn DbManager>) -> BKResult<Server> {
        let db = db_manager.get_connection()?;
        let state = AppState::new(db);

        let addr = format!("{}:{}", settings.web.host, settings.web.port);
        let router_prefix = settings.web.router_prefix.clone();
        let worker_count = settings.web.get_worker_count();

        let server = HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .wrap(NormalizePath::trim())
                .configure(configure_app(state.clone(), &router_prefix))
        })
        .workers(worker_count)
        .bind(&addr)
        .map_err(|e| BKError::from(format!("Failed to bind HTTP server to {addr}: {e}")))?;

        info!("Listening on http://{}", addr);
        Ok(server.run())
    }
}

#[async_trait]
impl WebServer for BKWebServer {
    #[inline]
    #[instrument(name = "init-web-server", skip_all)]
    /// Initialize and start the web server
    async fn init(
        settings: &Settings,
        db_manager: Arc<dyn DbManager>,
    ) -> BKResult<Arc<Self>, InitContextError> {
        let server = Self::create_server(settings, db_manager).map_err(|e| {
            InitContextError::Primitive(format!("Failed to create web server: {e}"))
        })?;
        let server_handle = server.handle();

        tokio::spawn(async move {
            if let Err(e) = server.await {
                error!(error=%e, "Web server failed to start");
            }
        });

        Ok(Arc::new(BKWebServer {
            server: Arc::new(Mutex::new(Some(server_handle))),
        }))
    }

    #[inline]
    #[instrument(name = "web-server-stop", skip_all)]
    /// Gracefully stop the web server
    async fn stop(&self) -> BKResult<()> {
        info!("Stopping web server...");
        let mut server_guard = self.server.lock().await;
        if let Some(handle) = server_guard.take() {
            handle.stop(true).await;
        }
        info!("Web server stopped successfully");

        Ok(())
    }
}
