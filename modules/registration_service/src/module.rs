//! Module declaration and lifecycle implementation

use crate::api::native::NativeClient;
use crate::api::rest::auth::JwtAuth;
use crate::config::Config;
use crate::contract::RegistrationApi;
use crate::domain::Service;
use crate::infra::storage::repositories::{SeaOrmMentorRepository, SeaOrmStudentRepository};
use anyhow::Result;
use axum::{extract::DefaultBodyLimit, Router};
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

/// Registration service module
pub struct RegistrationServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for RegistrationServiceModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl RegistrationServiceModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
        }
    }

    /// Run schema migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Registration service migrations completed");
        Ok(())
    }

    /// Build repositories and the domain service on top of `db`
    pub async fn init(&self, db: Arc<DatabaseConnection>) -> Result<()> {
        let mentor_repo = Arc::new(SeaOrmMentorRepository::new(db.clone()));
        let student_repo = Arc::new(SeaOrmStudentRepository::new(db));

        let service = Arc::new(Service::new(mentor_repo, student_repo));
        *self.service.write() = Some(service);

        tracing::info!("Registration service initialized");
        Ok(())
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn RegistrationApi>> {
        Ok(Arc::new(NativeClient::new(self.service()?)))
    }

    /// Mount REST routes on `router`
    pub fn register_rest(&self, router: Router) -> Result<Router> {
        let service = self.service()?;
        let config = self.config.read().clone();

        if config.jwt_secret.is_empty() {
            anyhow::bail!("jwt_secret must be configured");
        }
        let auth = Arc::new(JwtAuth::new(&config.jwt_secret));

        tracing::info!("Registering registration service REST routes");
        let router = crate::api::rest::routes::register_routes(router, service, auth)?;
        Ok(router.layer(DefaultBodyLimit::max(config.max_body_size)))
    }

    /// Connect, migrate, initialize and serve HTTP until `cancel` fires
    pub async fn serve(self: Arc<Self>, cancel: CancellationToken) -> Result<()> {
        let config = self.config.read().clone();

        tracing::info!("Connecting to database");
        let db = Arc::new(sea_orm::Database::connect(&config.database_url).await?);
        self.migrate(&db).await?;
        self.init(db).await?;

        let router = self
            .register_rest(Router::new())?
            .layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
        tracing::info!(addr = %listener.local_addr()?, "Registration server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(async move { cancel.cancelled().await })
            .await?;

        tracing::info!("Registration server stopped");
        Ok(())
    }
}
