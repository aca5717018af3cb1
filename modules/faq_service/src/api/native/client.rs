//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Faq, FaqApi, FaqCategory, FaqCategoryView, FaqError, FaqStoreView, StoreId, UrlRewrite,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl FaqApi for NativeClient {
    async fn load_faq(&self, faq_id: i32) -> Result<Faq, FaqError> {
        self.service.load_faq(faq_id).await
    }

    async fn list_faqs(&self) -> Result<Vec<Faq>, FaqError> {
        self.service.list_faqs().await
    }

    async fn save_faq(&self, faq: Faq) -> Result<Faq, FaqError> {
        self.service.save_faq(faq).await
    }

    async fn delete_faq(&self, faq_id: i32) -> Result<(), FaqError> {
        self.service.delete_faq(faq_id).await
    }

    async fn get_faq_store(&self, faq_id: i32) -> Result<Option<FaqStoreView>, FaqError> {
        self.service.get_faq_store(faq_id).await
    }

    async fn get_faq_category(&self, faq_id: i32) -> Result<Option<FaqCategoryView>, FaqError> {
        self.service.get_faq_category(faq_id).await
    }

    async fn save_category(&self, category: FaqCategory) -> Result<FaqCategory, FaqError> {
        self.service.save_category(category).await
    }

    async fn load_category(&self, category_id: i32) -> Result<FaqCategory, FaqError> {
        self.service.load_category(category_id).await
    }

    async fn list_categories(&self) -> Result<Vec<FaqCategory>, FaqError> {
        self.service.list_categories().await
    }

    async fn resolve_request_path(
        &self,
        request_path: &str,
        store_id: StoreId,
    ) -> Result<Option<UrlRewrite>, FaqError> {
        self.service.resolve_request_path(request_path, store_id).await
    }
}
