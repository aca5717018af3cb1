//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::FaqApi;
pub use error::FaqError;
pub use model::{
    Faq, FaqCategory, FaqCategoryView, FaqStatus, FaqStoreView, Store, StoreId, UrlRewrite,
    DEFAULT_STORE_ID, FAQ_QUESTION_ENTITY_TYPE,
};
