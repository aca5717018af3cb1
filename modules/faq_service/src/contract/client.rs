//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules (storefront rendering,
//! admin tooling) use to interact with the FAQ service.
//! NO HTTP - direct function calls for performance.

use super::{
    error::FaqError,
    model::{Faq, FaqCategory, FaqCategoryView, FaqStoreView, StoreId, UrlRewrite},
};
use async_trait::async_trait;

/// FAQ service API for inter-module communication
#[async_trait]
pub trait FaqApi: Send + Sync {
    // ===== FAQ Operations =====

    /// Load a FAQ together with its store and category assignments
    async fn load_faq(&self, faq_id: i32) -> Result<Faq, FaqError>;

    /// List FAQs with their assignments
    async fn list_faqs(&self) -> Result<Vec<Faq>, FaqError>;

    /// Validate and persist a FAQ, then replace its relations and URL rewrites
    async fn save_faq(&self, faq: Faq) -> Result<Faq, FaqError>;

    /// Delete a FAQ with its relations and URL rewrites
    async fn delete_faq(&self, faq_id: i32) -> Result<(), FaqError>;

    /// FAQ visible in the current store (or the default scope)
    async fn get_faq_store(&self, faq_id: i32) -> Result<Option<FaqStoreView>, FaqError>;

    /// FAQ joined to its active category
    async fn get_faq_category(&self, faq_id: i32) -> Result<Option<FaqCategoryView>, FaqError>;

    // ===== Category Operations =====

    /// Validate and persist a category
    async fn save_category(&self, category: FaqCategory) -> Result<FaqCategory, FaqError>;

    /// Load a category
    async fn load_category(&self, category_id: i32) -> Result<FaqCategory, FaqError>;

    /// List categories ordered by sort order
    async fn list_categories(&self) -> Result<Vec<FaqCategory>, FaqError>;

    // ===== Storefront Routing =====

    /// Look up the rewrite row for a storefront request path
    async fn resolve_request_path(
        &self,
        request_path: &str,
        store_id: StoreId,
    ) -> Result<Option<UrlRewrite>, FaqError>;
}
