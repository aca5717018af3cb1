//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== FAQ DTOs =====

/// FAQ response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaqDto {
    pub faq_id: i32,

    #[schema(example = "How do I reset my password?")]
    pub title: String,

    pub content: String,

    /// URL key
    #[schema(example = "how-do-i-reset-my-password")]
    pub identifier: String,

    pub is_active: bool,

    /// Store IDs the FAQ is visible in (0 = all stores)
    pub stores: Vec<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Create/Update FAQ request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveFaqRequest {
    #[schema(example = "How do I reset my password?")]
    pub title: String,

    #[serde(default)]
    pub content: String,

    /// URL key; generated from the title when blank
    #[serde(default)]
    pub identifier: String,

    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Store IDs (0 = all stores)
    #[serde(default)]
    pub stores: Vec<i32>,

    #[serde(default)]
    pub category_id: Option<i32>,
}

/// FAQ as visible in a store
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaqStoreViewDto {
    pub faq_id: i32,
    pub title: String,
    pub content: String,
    pub identifier: String,
    /// Matched store (0 = default scope)
    pub store_id: i32,
}

/// FAQ with its category title and URL key
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaqCategoryViewDto {
    pub faq_id: i32,
    pub category_id: i32,
    /// Category title
    pub title: String,
    /// Category URL key
    pub identifier: String,
}

/// URL rewrite row owned by a FAQ
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UrlRewriteDto {
    pub url_rewrite_id: Option<i32>,
    #[schema(example = "faq-question")]
    pub entity_type: String,
    pub entity_id: i32,
    #[schema(example = "faq/how-do-i-reset-my-password.html")]
    pub request_path: String,
    #[schema(example = "faq/question/view/faq_id/1")]
    pub target_path: String,
    pub store_id: i32,
}

// ===== Category DTOs =====

/// Category response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaqCategoryDto {
    pub category_id: i32,

    #[schema(example = "Account")]
    pub title: String,

    #[schema(example = "account")]
    pub identifier: String,

    pub is_active: bool,

    pub sort_order: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Create/Update category request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveCategoryRequest {
    pub title: String,

    #[serde(default)]
    pub identifier: String,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub sort_order: i32,
}

// ===== Misc DTOs =====

/// Option of the status select
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusOptionDto {
    pub value: i16,
    #[schema(example = "Active")]
    pub label: String,
}

/// Store selection for storefront lookups
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreQuery {
    /// Defaults to the current store
    pub store_id: Option<i32>,
}

// ===== List Response DTOs =====

/// List of FAQs
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FaqListResponse {
    pub items: Vec<FaqDto>,
    pub total: usize,
}

/// List of categories
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FaqCategoryListResponse {
    pub items: Vec<FaqCategoryDto>,
    pub total: usize,
}

fn default_true() -> bool {
    true
}
