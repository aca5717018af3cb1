//! Contract models for FAQ service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};

/// Store identifier as used by the host platform
pub type StoreId = i32;

/// Store ID of the default scope ("all stores")
pub const DEFAULT_STORE_ID: StoreId = 0;

/// Entity type written to url_rewrite rows owned by FAQ questions
pub const FAQ_QUESTION_ENTITY_TYPE: &str = "faq-question";

/// FAQ question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    /// Primary key, `None` until the FAQ is first saved
    pub faq_id: Option<i32>,
    /// Question title
    pub title: String,
    /// Answer body
    pub content: String,
    /// URL key; generated from the title when left blank
    pub identifier: String,
    /// Visibility status
    pub status: FaqStatus,
    /// Assigned store IDs (not stored in the faq row)
    pub stores: Vec<StoreId>,
    /// Assigned category (not stored in the faq row)
    pub category_id: Option<i32>,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl Faq {
    /// Create a new, unsaved and enabled FAQ
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            faq_id: None,
            title: title.into(),
            content: content.into(),
            identifier: String::new(),
            status: FaqStatus::Enabled,
            stores: Vec::new(),
            category_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn with_stores(mut self, stores: impl IntoIterator<Item = StoreId>) -> Self {
        self.stores = stores.into_iter().collect();
        self
    }

    pub fn with_category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_status(mut self, status: FaqStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether the FAQ has been persisted
    pub fn is_new(&self) -> bool {
        !matches!(self.faq_id, Some(id) if id > 0)
    }
}

/// FAQ category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCategory {
    /// Primary key, `None` until the category is first saved
    pub category_id: Option<i32>,
    /// Category title
    pub title: String,
    /// URL key; generated from the title when left blank
    pub identifier: String,
    /// Visibility status
    pub status: FaqStatus,
    /// Position in category listings
    pub sort_order: i32,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl FaqCategory {
    /// Create a new, unsaved and enabled category
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            category_id: None,
            title: title.into(),
            identifier: String::new(),
            status: FaqStatus::Enabled,
            sort_order: 0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn with_status(mut self, status: FaqStatus) -> Self {
        self.status = status;
        self
    }
}

/// Active flag shared by FAQs and categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaqStatus {
    #[default]
    Enabled,
    Disabled,
}

impl FaqStatus {
    /// Column value (`is_active`)
    pub fn value(self) -> i16 {
        match self {
            Self::Enabled => 1,
            Self::Disabled => 0,
        }
    }

    /// Anything other than 1 is treated as disabled
    pub fn from_value(value: i16) -> Self {
        if value == 1 {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Enabled => "Active",
            Self::Disabled => "InActive",
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    /// `(value, label)` pairs for form rendering
    pub fn options() -> Vec<(i16, &'static str)> {
        [Self::Enabled, Self::Disabled]
            .into_iter()
            .map(|status| (status.value(), status.label()))
            .collect()
    }
}

/// Store (storefront view) as reported by the store manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub store_id: StoreId,
    pub code: String,
    pub name: String,
    pub is_active: bool,
}

/// Row of the host platform's url_rewrite table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRewrite {
    /// Primary key, `None` for rows not yet inserted
    pub url_rewrite_id: Option<i32>,
    pub entity_type: String,
    pub entity_id: i32,
    pub request_path: String,
    pub target_path: String,
    pub redirect_type: i16,
    pub is_autogenerated: bool,
    pub store_id: StoreId,
}

/// FAQ as visible in a store (result of the store visibility lookup)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqStoreView {
    pub faq_id: i32,
    pub title: String,
    pub content: String,
    pub identifier: String,
    pub status: FaqStatus,
    /// Matched store row; the default scope when visible everywhere
    pub store_id: StoreId,
}

/// FAQ joined to its active category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCategoryView {
    pub faq_id: i32,
    pub category_id: i32,
    /// Category title
    pub title: String,
    /// Category URL key
    pub identifier: String,
}
