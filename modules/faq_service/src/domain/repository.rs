//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use super::relations::RelationPlan;
use crate::contract::{Faq, FaqCategory, FaqCategoryView, FaqStoreView, StoreId, UrlRewrite};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for FAQ questions and their store/category/rewrite rows
#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// Find a FAQ by ID with its store and category assignments attached
    async fn find_by_id(&self, faq_id: i32) -> Result<Option<Faq>>;

    /// List all FAQs with their assignments
    async fn list_all(&self) -> Result<Vec<Faq>>;

    /// Whether another FAQ linked to any of `stores` uses `identifier`
    async fn identifier_exists(
        &self,
        identifier: &str,
        stores: &[StoreId],
        exclude_faq_id: Option<i32>,
    ) -> Result<bool>;

    /// Insert or update the FAQ row and replace its relations in one transaction
    async fn save(&self, faq: &Faq, relations: &RelationPlan) -> Result<Faq>;

    /// Delete the FAQ row with its relations and URL rewrites
    async fn delete(&self, faq_id: i32) -> Result<()>;

    /// Active FAQ linked to one of `store_ids`
    async fn find_visible(&self, faq_id: i32, store_ids: &[StoreId])
        -> Result<Option<FaqStoreView>>;

    /// FAQ joined to its active category
    async fn find_with_category(&self, faq_id: i32) -> Result<Option<FaqCategoryView>>;
}

/// Repository for FAQ categories
#[async_trait]
pub trait FaqCategoryRepository: Send + Sync {
    /// Insert or update a category
    async fn save(&self, category: &FaqCategory) -> Result<FaqCategory>;

    /// Find a category by ID
    async fn find_by_id(&self, category_id: i32) -> Result<Option<FaqCategory>>;

    /// List categories ordered by sort order, then title
    async fn list_all(&self) -> Result<Vec<FaqCategory>>;

    /// Whether another category uses `identifier`
    async fn identifier_exists(&self, identifier: &str, exclude_category_id: Option<i32>)
        -> Result<bool>;
}

/// Read access to the url_rewrite table
#[async_trait]
pub trait UrlRewriteRepository: Send + Sync {
    /// Rewrite row for a request path in a store
    async fn find_by_request_path(
        &self,
        request_path: &str,
        store_id: StoreId,
    ) -> Result<Option<UrlRewrite>>;

    /// All rewrite rows of an entity
    async fn find_by_entity(&self, entity_type: &str, entity_id: i32) -> Result<Vec<UrlRewrite>>;
}
