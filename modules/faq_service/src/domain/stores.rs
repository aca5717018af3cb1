//! Store manager seam and target store resolution

use crate::contract::{Store, StoreId, DEFAULT_STORE_ID};

/// Host platform store manager
pub trait StoreManager: Send + Sync {
    /// Whether only one storefront is configured
    fn has_single_store(&self) -> bool;

    /// All configured stores, active or not
    fn stores(&self) -> Vec<Store>;

    /// Store serving the current request
    fn current_store_id(&self) -> StoreId;

    /// IDs of the active stores, in configuration order
    fn active_store_ids(&self) -> Vec<StoreId> {
        self.stores()
            .into_iter()
            .filter(|store| store.is_active)
            .map(|store| store.store_id)
            .collect()
    }
}

/// Stores a FAQ is saved for.
///
/// A single-store install always targets the default scope. Otherwise the
/// assigned list is used as is, with every active store merged in when the
/// default scope is part of it.
pub fn resolve_target_stores(
    store_manager: &dyn StoreManager,
    assigned: &[StoreId],
) -> Vec<StoreId> {
    if store_manager.has_single_store() {
        return vec![DEFAULT_STORE_ID];
    }

    let mut resolved = Vec::with_capacity(assigned.len());
    push_unique(&mut resolved, assigned.iter().copied());

    if assigned.contains(&DEFAULT_STORE_ID) {
        push_unique(&mut resolved, store_manager.active_store_ids());
    }

    resolved
}

/// Stores that receive a URL rewrite row for the resolved target set.
///
/// Rewrites only exist for concrete stores (ID > 0); the default scope
/// stands for every active store.
pub fn rewrite_stores(store_manager: &dyn StoreManager, resolved: &[StoreId]) -> Vec<StoreId> {
    let mut stores = Vec::with_capacity(resolved.len());
    push_unique(&mut stores, resolved.iter().copied());

    if resolved.contains(&DEFAULT_STORE_ID) {
        push_unique(&mut stores, store_manager.active_store_ids());
    }

    stores.retain(|store_id| *store_id > DEFAULT_STORE_ID);
    stores
}

fn push_unique(target: &mut Vec<StoreId>, ids: impl IntoIterator<Item = StoreId>) {
    for id in ids {
        if !target.contains(&id) {
            target.push(id);
        }
    }
}
