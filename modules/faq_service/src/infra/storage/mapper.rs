//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{faq, faq_category, url_rewrite};
use crate::contract::{
    Faq, FaqCategory, FaqCategoryView, FaqStatus, FaqStoreView, UrlRewrite,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, FromQueryResult};

// ===== FAQ Conversions =====

impl From<faq::Model> for Faq {
    fn from(entity: faq::Model) -> Self {
        Self {
            faq_id: Some(entity.faq_id),
            title: entity.title,
            content: entity.content,
            identifier: entity.identifier,
            status: FaqStatus::from_value(entity.is_active),
            stores: Vec::new(),
            category_id: None,
            created_at: Some(entity.creation_time),
            updated_at: Some(entity.update_time),
        }
    }
}

/// Active model for writing a FAQ row at `now`
pub fn faq_active_model(model: &Faq, now: DateTime<Utc>) -> faq::ActiveModel {
    use sea_orm::ActiveValue::*;

    faq::ActiveModel {
        faq_id: primary_key(model.faq_id),
        title: Set(model.title.clone()),
        content: Set(model.content.clone()),
        identifier: Set(model.identifier.clone()),
        is_active: Set(model.status.value()),
        creation_time: creation_time(model.faq_id, model.created_at, now),
        update_time: Set(now),
    }
}

// ===== Category Conversions =====

impl From<faq_category::Model> for FaqCategory {
    fn from(entity: faq_category::Model) -> Self {
        Self {
            category_id: Some(entity.category_id),
            title: entity.title,
            identifier: entity.identifier,
            status: FaqStatus::from_value(entity.is_active),
            sort_order: entity.sort_order,
            created_at: Some(entity.creation_time),
            updated_at: Some(entity.update_time),
        }
    }
}

/// Active model for writing a category row at `now`
pub fn category_active_model(model: &FaqCategory, now: DateTime<Utc>) -> faq_category::ActiveModel {
    use sea_orm::ActiveValue::*;

    faq_category::ActiveModel {
        category_id: primary_key(model.category_id),
        title: Set(model.title.clone()),
        identifier: Set(model.identifier.clone()),
        is_active: Set(model.status.value()),
        sort_order: Set(model.sort_order),
        creation_time: creation_time(model.category_id, model.created_at, now),
        update_time: Set(now),
    }
}

// ===== URL Rewrite Conversions =====

impl From<url_rewrite::Model> for UrlRewrite {
    fn from(entity: url_rewrite::Model) -> Self {
        Self {
            url_rewrite_id: Some(entity.url_rewrite_id),
            entity_type: entity.entity_type,
            entity_id: entity.entity_id,
            request_path: entity.request_path,
            target_path: entity.target_path,
            redirect_type: entity.redirect_type,
            is_autogenerated: entity.is_autogenerated == 1,
            store_id: entity.store_id,
        }
    }
}

impl From<&UrlRewrite> for url_rewrite::ActiveModel {
    fn from(model: &UrlRewrite) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            url_rewrite_id: primary_key(model.url_rewrite_id),
            entity_type: Set(model.entity_type.clone()),
            entity_id: Set(model.entity_id),
            request_path: Set(model.request_path.clone()),
            target_path: Set(model.target_path.clone()),
            redirect_type: Set(model.redirect_type),
            store_id: Set(model.store_id),
            is_autogenerated: Set(i16::from(model.is_autogenerated)),
        }
    }
}

// ===== Read Helper Rows =====

/// Row of the store visibility lookup
#[derive(Debug, Clone, FromQueryResult)]
pub struct FaqStoreRow {
    pub faq_id: i32,
    pub title: String,
    pub content: String,
    pub identifier: String,
    pub is_active: i16,
    pub store_id: i32,
}

impl From<FaqStoreRow> for FaqStoreView {
    fn from(row: FaqStoreRow) -> Self {
        Self {
            faq_id: row.faq_id,
            title: row.title,
            content: row.content,
            identifier: row.identifier,
            status: FaqStatus::from_value(row.is_active),
            store_id: row.store_id,
        }
    }
}

/// Row of the category lookup
#[derive(Debug, Clone, FromQueryResult)]
pub struct FaqCategoryRow {
    pub faq_id: i32,
    pub category_id: i32,
    pub title: String,
    pub identifier: String,
}

impl From<FaqCategoryRow> for FaqCategoryView {
    fn from(row: FaqCategoryRow) -> Self {
        Self {
            faq_id: row.faq_id,
            category_id: row.category_id,
            title: row.title,
            identifier: row.identifier,
        }
    }
}

/// Unsaved models leave the auto-increment key to the database
fn primary_key(id: Option<i32>) -> ActiveValue<i32> {
    match id.filter(|id| *id > 0) {
        Some(id) => ActiveValue::Unchanged(id),
        None => ActiveValue::NotSet,
    }
}

/// Existing rows keep their stored creation time unless one is given
fn creation_time(
    id: Option<i32>,
    created_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> ActiveValue<DateTime<Utc>> {
    match (created_at, primary_key(id)) {
        (Some(created_at), _) => ActiveValue::Set(created_at),
        (None, ActiveValue::NotSet) => ActiveValue::Set(now),
        (None, _) => ActiveValue::NotSet,
    }
}
