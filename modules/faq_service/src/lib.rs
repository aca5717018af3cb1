//! FAQ Service Module
//!
//! FAQ questions and categories for a multi-store storefront. Each saved
//! FAQ is linked to the stores it is visible in, to at most one category,
//! and gets one SEO request path per store resolving to its detail page.

// Public exports
pub mod contract;
pub use contract::{
    client::FaqApi, error::FaqError, Faq, FaqCategory, FaqCategoryView, FaqStatus, FaqStoreView,
    Store, StoreId, UrlRewrite,
};

pub mod module;
pub use module::FaqServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

pub use config::{Config, StoreConfig};
