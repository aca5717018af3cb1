//! Infrastructure layer - persistence and host platform adapters

pub mod storage;
pub mod stores;

pub use stores::ConfiguredStoreManager;
