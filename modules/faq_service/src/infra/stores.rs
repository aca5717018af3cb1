//! Store manager backed by the module configuration

use crate::config::StoreConfig;
use crate::contract::{Store, StoreId, DEFAULT_STORE_ID};
use crate::domain::StoreManager;

/// Store manager serving the configured storefront views
pub struct ConfiguredStoreManager {
    stores: Vec<Store>,
    current: StoreId,
}

impl ConfiguredStoreManager {
    pub fn new(stores: &[StoreConfig], current: Option<StoreId>) -> Self {
        let stores: Vec<Store> = stores
            .iter()
            .map(|store| Store {
                store_id: store.store_id,
                code: store.code.clone(),
                name: store.name.clone(),
                is_active: store.is_active,
            })
            .collect();

        let current = current
            .or_else(|| stores.iter().find(|s| s.is_active).map(|s| s.store_id))
            .unwrap_or(DEFAULT_STORE_ID);

        Self { stores, current }
    }
}

impl StoreManager for ConfiguredStoreManager {
    fn has_single_store(&self) -> bool {
        self.stores.len() < 2
    }

    fn stores(&self) -> Vec<Store> {
        self.stores.clone()
    }

    fn current_store_id(&self) -> StoreId {
        self.current
    }
}
