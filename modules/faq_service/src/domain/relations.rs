//! Relation rows written after a FAQ row is persisted
//!
//! The plan is computed before the row exists and materialized once the
//! FAQ ID is known. Every save replaces the category link, the store links
//! and the FAQ's URL rewrites as a whole.

use crate::contract::{StoreId, UrlRewrite, FAQ_QUESTION_ENTITY_TYPE};

/// Route the storefront serves FAQ detail pages from
pub const QUESTION_VIEW_ROUTE: &str = "faq/question/view/faq_id";

/// Top-level path segments owned by the REST API
pub const RESERVED_ROUTE_SEGMENTS: &[&str] = &["faqs", "faq-statuses", "faq-categories", "faq-api"];

/// Prefix and suffix of generated request paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewritePaths {
    pub question_path: String,
    pub url_suffix: String,
}

impl Default for RewritePaths {
    fn default() -> Self {
        Self {
            question_path: "faq".to_string(),
            url_suffix: ".html".to_string(),
        }
    }
}

impl RewritePaths {
    /// `faq/{identifier}.html`
    pub fn request_path(&self, identifier: &str) -> String {
        format!(
            "{}/{}{}",
            self.question_path.trim_matches('/'),
            identifier,
            self.url_suffix
        )
    }

    /// `faq/question/view/faq_id/{id}`
    pub fn target_path(faq_id: i32) -> String {
        format!("{QUESTION_VIEW_ROUTE}/{faq_id}")
    }

    /// Reject question paths that cannot be mounted next to the REST API
    pub fn check_question_path(&self) -> anyhow::Result<()> {
        let path = self.question_path.trim_matches('/');
        if path.is_empty() {
            anyhow::bail!("question_path must not be empty");
        }
        if path
            .split('/')
            .any(|segment| segment.is_empty() || segment.contains(['{', '}', '*', '?', '#']))
            || path.chars().any(char::is_whitespace)
        {
            anyhow::bail!("question_path '{}' is not a plain URL path", path);
        }
        if let Some(first) = path.split('/').next() {
            if RESERVED_ROUTE_SEGMENTS.contains(&first) {
                anyhow::bail!("question_path '{}' clashes with the /{} API routes", path, first);
            }
        }
        if path == QUESTION_VIEW_ROUTE {
            anyhow::bail!("question_path '{}' clashes with the question view route", path);
        }
        Ok(())
    }
}

/// Rows replacing a FAQ's relations on save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationPlan {
    pub category_id: Option<i32>,
    pub stores: Vec<StoreId>,
    pub rewrite_stores: Vec<StoreId>,
    pub request_path: String,
}

impl RelationPlan {
    /// `(faq_id, store_id)` rows for the faq_store table
    pub fn store_rows(&self, faq_id: i32) -> Vec<(i32, StoreId)> {
        self.stores.iter().map(|&store_id| (faq_id, store_id)).collect()
    }

    /// `(faq_id, category_id)` row for the faq_category_id table
    pub fn category_row(&self, faq_id: i32) -> Option<(i32, i32)> {
        self.category_id.map(|category_id| (faq_id, category_id))
    }

    pub fn rewrite_rows(&self, faq_id: i32) -> Vec<UrlRewrite> {
        let target_path = RewritePaths::target_path(faq_id);
        self.rewrite_stores
            .iter()
            .map(|&store_id| UrlRewrite {
                url_rewrite_id: None,
                entity_type: FAQ_QUESTION_ENTITY_TYPE.to_string(),
                entity_id: faq_id,
                request_path: self.request_path.clone(),
                target_path: target_path.clone(),
                redirect_type: 0,
                is_autogenerated: true,
                store_id,
            })
            .collect()
    }
}
