//! Common test utilities: store layouts, SQLite databases and output helpers

#![allow(dead_code)]

use faq_service::config::{Config, StoreConfig};
use faq_service::infra::storage::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Store layouts used across the suites
pub struct TestStores;

impl TestStores {
    /// One storefront, the usual single-store install
    pub fn single() -> Vec<StoreConfig> {
        vec![store(1, "default", true)]
    }

    /// English, French and a disabled German storefront
    pub fn multi() -> Vec<StoreConfig> {
        vec![
            store(1, "en", true),
            store(2, "fr", true),
            store(3, "de", false),
        ]
    }

    pub fn print_structure(stores: &[StoreConfig]) {
        println!("\n🏬 Store Layout:");
        for s in stores {
            println!(
                "   ├─ {} (id {}){}",
                s.code,
                s.store_id,
                if s.is_active { "" } else { " [inactive]" }
            );
        }
    }
}

fn store(store_id: i32, code: &str, is_active: bool) -> StoreConfig {
    StoreConfig {
        store_id,
        code: code.to_string(),
        name: format!("{} Store View", code.to_uppercase()),
        is_active,
    }
}

/// Module configuration over the given stores
pub fn config_with(stores: Vec<StoreConfig>) -> Config {
    Config {
        stores,
        ..Config::default()
    }
}

/// Fresh in-memory SQLite database with migrations applied
pub async fn sqlite_db() -> DatabaseConnection {
    // one connection so every query sees the same in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open SQLite database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}
