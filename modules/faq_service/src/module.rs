//! Module lifecycle: configuration, migrations, wiring and REST registration

use crate::config::Config;
use crate::contract::FaqApi;
use crate::domain::Service;
use crate::infra::storage::{
    Migrator, SeaOrmFaqCategoryRepository, SeaOrmFaqRepository, SeaOrmUrlRewriteRepository,
};
use crate::infra::ConfiguredStoreManager;
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// FAQ service module
pub struct FaqServiceModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for FaqServiceModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl FaqServiceModule {
    /// Apply database migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("FAQ service migrations completed");
        Ok(())
    }

    /// Validate configuration and build the domain service
    pub async fn init(&self, cfg: Config, db: DatabaseConnection) -> Result<()> {
        cfg.validate()?;

        let conn = Arc::new(db);

        // Build repositories
        let faq_repo = Arc::new(SeaOrmFaqRepository::new(conn.clone()));
        let category_repo = Arc::new(SeaOrmFaqCategoryRepository::new(conn.clone()));
        let rewrite_repo = Arc::new(SeaOrmUrlRewriteRepository::new(conn));

        let store_manager = Arc::new(ConfiguredStoreManager::new(&cfg.stores, cfg.current_store));

        // Build domain service
        let service = Service::new(faq_repo, category_repo, rewrite_repo, store_manager)
            .with_paths(cfg.rewrite_paths());

        tracing::info!(
            stores = cfg.stores.len(),
            current_store = service.current_store_id(),
            question_path = %cfg.question_path,
            "FAQ service initialized"
        );

        *self.service.write() = Some(Arc::new(service));
        *self.config.write() = cfg;
        Ok(())
    }

    /// Configuration the module was initialized with
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Domain service, once initialized
    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn FaqApi>> {
        Ok(Arc::new(crate::api::native::NativeClient::new(self.service()?)))
    }

    /// Mount the REST API on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering FAQ service REST routes");
        crate::api::rest::register_routes(router, service)
    }
}
