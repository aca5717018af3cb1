//! Domain service - business logic orchestration

use super::identifier::{
    is_numeric_identifier, is_path_safe_identifier, SlugUrlKeyGenerator, UrlKeyGenerator,
    MAX_IDENTIFIER_LEN,
};
use super::relations::{RelationPlan, RewritePaths};
use super::repository::{FaqCategoryRepository, FaqRepository, UrlRewriteRepository};
use super::stores::{resolve_target_stores, rewrite_stores, StoreManager};
use crate::contract::{
    Faq, FaqCategory, FaqCategoryView, FaqError, FaqStoreView, StoreId, UrlRewrite,
    DEFAULT_STORE_ID, FAQ_QUESTION_ENTITY_TYPE,
};
use std::sync::Arc;

/// Domain service for FAQ management
pub struct Service {
    faq_repo: Arc<dyn FaqRepository>,
    category_repo: Arc<dyn FaqCategoryRepository>,
    rewrite_repo: Arc<dyn UrlRewriteRepository>,
    store_manager: Arc<dyn StoreManager>,
    url_keys: Arc<dyn UrlKeyGenerator>,
    paths: RewritePaths,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        faq_repo: Arc<dyn FaqRepository>,
        category_repo: Arc<dyn FaqCategoryRepository>,
        rewrite_repo: Arc<dyn UrlRewriteRepository>,
        store_manager: Arc<dyn StoreManager>,
    ) -> Self {
        Self {
            faq_repo,
            category_repo,
            rewrite_repo,
            store_manager,
            url_keys: Arc::new(SlugUrlKeyGenerator),
            paths: RewritePaths::default(),
        }
    }

    /// Replace the URL key generator
    pub fn with_url_key_generator(mut self, url_keys: Arc<dyn UrlKeyGenerator>) -> Self {
        self.url_keys = url_keys;
        self
    }

    /// Replace the request path prefix/suffix
    pub fn with_paths(mut self, paths: RewritePaths) -> Self {
        self.paths = paths;
        self
    }

    // ===== FAQ Operations =====

    /// Load a FAQ with its store and category assignments
    pub async fn load_faq(&self, faq_id: i32) -> Result<Faq, FaqError> {
        if faq_id <= 0 {
            return Err(FaqError::not_found("faq", faq_id));
        }

        self.faq_repo
            .find_by_id(faq_id)
            .await
            .map_err(internal)?
            .ok_or_else(|| FaqError::not_found("faq", faq_id))
    }

    /// List all FAQs
    pub async fn list_faqs(&self) -> Result<Vec<Faq>, FaqError> {
        self.faq_repo.list_all().await.map_err(internal)
    }

    /// Validate and persist a FAQ, then replace its relations and URL rewrites
    pub async fn save_faq(&self, mut faq: Faq) -> Result<Faq, FaqError> {
        faq.identifier = self.prepare_identifier(&faq.identifier, &faq.title)?;

        let existing_id = faq.faq_id.filter(|id| *id > 0);
        if let Some(faq_id) = existing_id {
            self.ensure_faq_exists(faq_id).await?;
        }

        let stores = resolve_target_stores(self.store_manager.as_ref(), &faq.stores);

        if self
            .faq_repo
            .identifier_exists(&faq.identifier, &stores, existing_id)
            .await
            .map_err(internal)?
        {
            tracing::warn!(
                identifier = %faq.identifier,
                stores = ?stores,
                "Rejected FAQ save: URL key already used in target stores"
            );
            return Err(FaqError::DuplicateIdentifier {
                identifier: faq.identifier,
            });
        }

        if is_numeric_identifier(&faq.identifier) {
            tracing::warn!(identifier = %faq.identifier, "Rejected FAQ save: numeric URL key");
            return Err(FaqError::NumericIdentifier {
                identifier: faq.identifier,
            });
        }

        let plan = RelationPlan {
            category_id: faq.category_id.filter(|id| *id > 0),
            rewrite_stores: rewrite_stores(self.store_manager.as_ref(), &stores),
            request_path: self.paths.request_path(&faq.identifier),
            stores,
        };

        let saved = self.faq_repo.save(&faq, &plan).await.map_err(internal)?;

        tracing::info!(
            faq_id = ?saved.faq_id,
            identifier = %saved.identifier,
            stores = ?plan.stores,
            rewrites = plan.rewrite_stores.len(),
            "FAQ saved"
        );

        Ok(saved)
    }

    /// Delete a FAQ with its relations and URL rewrites
    pub async fn delete_faq(&self, faq_id: i32) -> Result<(), FaqError> {
        self.ensure_faq_exists(faq_id).await?;

        self.faq_repo.delete(faq_id).await.map_err(internal)?;

        tracing::info!(faq_id, "FAQ deleted");
        Ok(())
    }

    /// FAQ visible in the current store or the default scope
    pub async fn get_faq_store(&self, faq_id: i32) -> Result<Option<FaqStoreView>, FaqError> {
        self.get_faq_store_in(faq_id, self.store_manager.current_store_id())
            .await
    }

    /// FAQ visible in `store_id` or the default scope
    pub async fn get_faq_store_in(
        &self,
        faq_id: i32,
        store_id: StoreId,
    ) -> Result<Option<FaqStoreView>, FaqError> {
        if faq_id <= 0 {
            return Ok(None);
        }

        let mut store_ids = vec![DEFAULT_STORE_ID];
        if store_id != DEFAULT_STORE_ID {
            store_ids.push(store_id);
        }

        self.faq_repo
            .find_visible(faq_id, &store_ids)
            .await
            .map_err(internal)
    }

    /// FAQ joined to its active category
    pub async fn get_faq_category(
        &self,
        faq_id: i32,
    ) -> Result<Option<FaqCategoryView>, FaqError> {
        if faq_id <= 0 {
            return Ok(None);
        }

        self.faq_repo
            .find_with_category(faq_id)
            .await
            .map_err(internal)
    }

    // ===== Category Operations =====

    /// Validate and persist a category
    pub async fn save_category(&self, mut category: FaqCategory) -> Result<FaqCategory, FaqError> {
        category.identifier = self.prepare_identifier(&category.identifier, &category.title)?;

        let existing_id = category.category_id.filter(|id| *id > 0);
        if let Some(category_id) = existing_id {
            self.load_category(category_id).await?;
        }

        if self
            .category_repo
            .identifier_exists(&category.identifier, existing_id)
            .await
            .map_err(internal)?
        {
            tracing::warn!(identifier = %category.identifier, "Rejected category save: duplicate URL key");
            return Err(FaqError::DuplicateIdentifier {
                identifier: category.identifier,
            });
        }

        if is_numeric_identifier(&category.identifier) {
            tracing::warn!(identifier = %category.identifier, "Rejected category save: numeric URL key");
            return Err(FaqError::NumericIdentifier {
                identifier: category.identifier,
            });
        }

        let saved = self.category_repo.save(&category).await.map_err(internal)?;

        tracing::info!(
            category_id = ?saved.category_id,
            identifier = %saved.identifier,
            "FAQ category saved"
        );

        Ok(saved)
    }

    /// Load a category
    pub async fn load_category(&self, category_id: i32) -> Result<FaqCategory, FaqError> {
        if category_id <= 0 {
            return Err(FaqError::not_found("faq_category", category_id));
        }

        self.category_repo
            .find_by_id(category_id)
            .await
            .map_err(internal)?
            .ok_or_else(|| FaqError::not_found("faq_category", category_id))
    }

    /// List categories
    pub async fn list_categories(&self) -> Result<Vec<FaqCategory>, FaqError> {
        self.category_repo.list_all().await.map_err(internal)
    }

    // ===== Storefront Routing =====

    /// Rewrite row for a storefront request path
    pub async fn resolve_request_path(
        &self,
        request_path: &str,
        store_id: StoreId,
    ) -> Result<Option<UrlRewrite>, FaqError> {
        let request_path = request_path.trim_start_matches('/');
        if request_path.is_empty() {
            return Ok(None);
        }

        self.rewrite_repo
            .find_by_request_path(request_path, store_id)
            .await
            .map_err(internal)
    }

    /// FAQ behind a storefront request path, if visible in `store_id`
    pub async fn view_by_request_path(
        &self,
        request_path: &str,
        store_id: StoreId,
    ) -> Result<Option<FaqStoreView>, FaqError> {
        match self.resolve_request_path(request_path, store_id).await? {
            Some(rewrite) if rewrite.entity_type == FAQ_QUESTION_ENTITY_TYPE => {
                self.get_faq_store_in(rewrite.entity_id, store_id).await
            }
            _ => Ok(None),
        }
    }

    /// URL rewrite rows currently owned by a FAQ
    pub async fn faq_rewrites(&self, faq_id: i32) -> Result<Vec<UrlRewrite>, FaqError> {
        self.rewrite_repo
            .find_by_entity(FAQ_QUESTION_ENTITY_TYPE, faq_id)
            .await
            .map_err(internal)
    }

    /// Store serving the current request
    pub fn current_store_id(&self) -> StoreId {
        self.store_manager.current_store_id()
    }

    pub fn rewrite_paths(&self) -> &RewritePaths {
        &self.paths
    }

    // ===== Helper Methods =====

    /// Trimmed URL key, generated from the title when blank
    fn prepare_identifier(&self, identifier: &str, title: &str) -> Result<String, FaqError> {
        let identifier = identifier.trim();
        let identifier = if identifier.is_empty() {
            self.url_keys.generate_identifier(title)
        } else {
            identifier.to_string()
        };

        if identifier.is_empty() {
            return Err(FaqError::validation(
                "URL key is empty and cannot be generated from the title",
            ));
        }
        if identifier.chars().count() > MAX_IDENTIFIER_LEN {
            return Err(FaqError::validation(format!(
                "URL key cannot be longer than {} characters",
                MAX_IDENTIFIER_LEN
            )));
        }
        if !is_path_safe_identifier(&identifier) {
            return Err(FaqError::validation(
                "URL key cannot contain whitespace, '/', '\\', '?', '#' or '%'",
            ));
        }

        Ok(identifier)
    }

    async fn ensure_faq_exists(&self, faq_id: i32) -> Result<(), FaqError> {
        self.load_faq(faq_id).await.map(|_| ())
    }
}

fn internal(error: anyhow::Error) -> FaqError {
    tracing::error!(error = ?error, "FAQ storage operation failed");
    FaqError::Internal
}
