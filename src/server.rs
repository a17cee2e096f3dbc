//! Reusable server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: database connection,
//! migrations, the REST API listener and graceful shutdown. The CLI binary
//! and the integration tests both go through here.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use axum::Router;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::{CarService, GarageService, MaintenanceService};
use crate::config::AppConfig;
use crate::domain::UnitOfWorkFactory;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, SeaOrmUnitOfWorkFactory};
use crate::interfaces::http::{create_api_router, ApiServices};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── App assembly ───────────────────────────────────────────────────

/// Wires services on top of `db` and returns the complete HTTP router.
pub fn build_app(db: DatabaseConnection, prometheus_handle: PrometheusHandle) -> Router {
    let uow: Arc<dyn UnitOfWorkFactory> = Arc::new(SeaOrmUnitOfWorkFactory::new(db.clone()));
    let services = ApiServices {
        garages: Arc::new(GarageService::new(uow.clone())),
        cars: Arc::new(CarService::new(uow.clone())),
        maintenances: Arc::new(MaintenanceService::new(uow)),
    };
    create_api_router(services, db, prometheus_handle)
}

/// The global metrics recorder can only be installed once per process, so
/// restarts within the same process reuse it.
fn prometheus_handle() -> Result<PrometheusHandle, BuildError> {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    if let Some(handle) = PROM_HANDLE.get() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    info!("📊 Prometheus metrics recorder installed");
    Ok(PROM_HANDLE.get_or_init(|| handle).clone())
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running service.
///
/// ```rust,no_run
/// use car_garage::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.shutdown_signal().wait().await;
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the REST API is bound to.
    pub local_addr: SocketAddr,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Connects to the database, runs migrations (if enabled), binds the
    /// listener and starts serving in a background task.
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;

        info!("Starting garage service...");

        let prometheus_handle = prometheus_handle()?;

        // ── Database ───────────────────────────────────────────
        let db_config = app_cfg.database.to_database_config();
        let db = init_database(&db_config).await?;

        if opts.auto_migrate {
            info!("Running database migrations...");
            Migrator::up(&db, None).await?;
            info!("Migrations completed");
        }

        // ── REST API ───────────────────────────────────────────
        let app = build_app(db.clone(), prometheus_handle);

        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let api_shutdown = shutdown.signal();

        let listener = tokio::net::TcpListener::bind(app_cfg.listen_address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_server = axum::serve(listener, app).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        info!("🚀 Server started.");

        Ok(Self {
            config: app_cfg,
            local_addr,
            db,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown without waiting for it.
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Waits for the API task to finish (bounded by the configured shutdown
    /// timeout once shutdown was triggered), then closes the database.
    pub async fn wait(self) {
        info!("⏳ Waiting for server tasks to complete...");

        let timeout = Duration::from_secs(self.shutdown.timeout_secs());
        let signal = self.shutdown.signal();
        let mut api_task = self.api_task;
        let timed_out = tokio::select! {
            result = &mut api_task => {
                match result {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task panicked: {}", e),
                }
                false
            }
            _ = async {
                signal.wait().await;
                tokio::time::sleep(timeout).await;
            } => true,
        };

        if timed_out {
            warn!(
                timeout_secs = timeout.as_secs(),
                "Shutdown timeout elapsed, aborting open connections"
            );
            api_task.abort();
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("✅ Database connection closed");
        }

        info!("👋 Garage service shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("🛑 Shutting down garage service...");
        self.trigger_shutdown();
        self.wait().await;
    }
}

// ── Tracing ────────────────────────────────────────────────────────

/// Initialize tracing from the application config. `RUST_LOG` takes
/// precedence over `logging.level`.
///
/// Call once at process startup, before [`ServerHandle::start`].
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
