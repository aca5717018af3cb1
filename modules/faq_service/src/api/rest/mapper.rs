//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{self, FaqStatus};

// ===== FAQ conversions =====

impl From<contract::Faq> for FaqDto {
    fn from(faq: contract::Faq) -> Self {
        Self {
            faq_id: faq.faq_id.unwrap_or_default(),
            title: faq.title,
            content: faq.content,
            identifier: faq.identifier,
            is_active: faq.status.is_enabled(),
            stores: faq.stores,
            category_id: faq.category_id,
            created_at: faq.created_at,
            updated_at: faq.updated_at,
        }
    }
}

impl SaveFaqRequest {
    /// Contract model for saving under `faq_id` (`None` creates)
    pub fn into_faq(self, faq_id: Option<i32>) -> contract::Faq {
        contract::Faq {
            faq_id,
            title: self.title,
            content: self.content,
            identifier: self.identifier,
            status: status(self.is_active),
            stores: self.stores,
            category_id: self.category_id,
            created_at: None,
            updated_at: None,
        }
    }
}

impl From<contract::FaqStoreView> for FaqStoreViewDto {
    fn from(view: contract::FaqStoreView) -> Self {
        Self {
            faq_id: view.faq_id,
            title: view.title,
            content: view.content,
            identifier: view.identifier,
            store_id: view.store_id,
        }
    }
}

impl From<contract::FaqCategoryView> for FaqCategoryViewDto {
    fn from(view: contract::FaqCategoryView) -> Self {
        Self {
            faq_id: view.faq_id,
            category_id: view.category_id,
            title: view.title,
            identifier: view.identifier,
        }
    }
}

impl From<contract::UrlRewrite> for UrlRewriteDto {
    fn from(rewrite: contract::UrlRewrite) -> Self {
        Self {
            url_rewrite_id: rewrite.url_rewrite_id,
            entity_type: rewrite.entity_type,
            entity_id: rewrite.entity_id,
            request_path: rewrite.request_path,
            target_path: rewrite.target_path,
            store_id: rewrite.store_id,
        }
    }
}

// ===== Category conversions =====

impl From<contract::FaqCategory> for FaqCategoryDto {
    fn from(category: contract::FaqCategory) -> Self {
        Self {
            category_id: category.category_id.unwrap_or_default(),
            title: category.title,
            identifier: category.identifier,
            is_active: category.status.is_enabled(),
            sort_order: category.sort_order,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

impl SaveCategoryRequest {
    /// Contract model for saving under `category_id` (`None` creates)
    pub fn into_category(self, category_id: Option<i32>) -> contract::FaqCategory {
        contract::FaqCategory {
            category_id,
            title: self.title,
            identifier: self.identifier,
            status: status(self.is_active),
            sort_order: self.sort_order,
            created_at: None,
            updated_at: None,
        }
    }
}

// ===== Status conversions =====

impl From<(i16, &'static str)> for StatusOptionDto {
    fn from((value, label): (i16, &'static str)) -> Self {
        Self {
            value,
            label: label.to_string(),
        }
    }
}

fn status(is_active: bool) -> FaqStatus {
    if is_active {
        FaqStatus::Enabled
    } else {
        FaqStatus::Disabled
    }
}
