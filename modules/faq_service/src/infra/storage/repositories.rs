//! SeaORM repository implementations

use super::entity::{faq, faq_category, faq_category_id, faq_store, url_rewrite};
use super::mapper::{category_active_model, faq_active_model, FaqCategoryRow, FaqStoreRow};
use crate::contract::{
    Faq, FaqCategory, FaqCategoryView, FaqStatus, FaqStoreView, StoreId, UrlRewrite,
    FAQ_QUESTION_ENTITY_TYPE,
};
use crate::domain::relations::RelationPlan;
use crate::domain::repository::{FaqCategoryRepository, FaqRepository, UrlRewriteRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

// ===== FAQ Repository =====

pub struct SeaOrmFaqRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFaqRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FaqRepository for SeaOrmFaqRepository {
    async fn find_by_id(&self, faq_id: i32) -> Result<Option<Faq>> {
        let Some(model) = faq::Entity::find_by_id(faq_id).one(&*self.db).await? else {
            return Ok(None);
        };

        let mut faq: Faq = model.into();
        faq.stores = faq_store::Entity::find()
            .filter(faq_store::Column::FaqId.eq(faq_id))
            .order_by_asc(faq_store::Column::StoreId)
            .all(&*self.db)
            .await?
            .into_iter()
            .map(|row| row.store_id)
            .collect();
        faq.category_id = faq_category_id::Entity::find()
            .filter(faq_category_id::Column::FaqId.eq(faq_id))
            .order_by_asc(faq_category_id::Column::CategoryId)
            .one(&*self.db)
            .await?
            .map(|row| row.category_id);

        Ok(Some(faq))
    }

    async fn list_all(&self) -> Result<Vec<Faq>> {
        let rows = faq::Entity::find()
            .order_by_asc(faq::Column::FaqId)
            .find_with_related(faq_store::Entity)
            .all(&*self.db)
            .await?;

        let mut categories: HashMap<i32, i32> = HashMap::new();
        for link in faq_category_id::Entity::find()
            .order_by_desc(faq_category_id::Column::CategoryId)
            .all(&*self.db)
            .await?
        {
            categories.insert(link.faq_id, link.category_id);
        }

        Ok(rows
            .into_iter()
            .map(|(model, store_rows)| {
                let faq_id = model.faq_id;
                let mut faq: Faq = model.into();
                faq.stores = store_rows.into_iter().map(|row| row.store_id).collect();
                faq.stores.sort_unstable();
                faq.category_id = categories.get(&faq_id).copied();
                faq
            })
            .collect())
    }

    async fn identifier_exists(
        &self,
        identifier: &str,
        stores: &[StoreId],
        exclude_faq_id: Option<i32>,
    ) -> Result<bool> {
        if stores.is_empty() {
            return Ok(false);
        }

        let mut query = faq::Entity::find()
            .inner_join(faq_store::Entity)
            .filter(faq::Column::Identifier.eq(identifier))
            .filter(faq_store::Column::StoreId.is_in(stores.iter().copied()));

        if let Some(faq_id) = exclude_faq_id {
            query = query.filter(faq::Column::FaqId.ne(faq_id));
        }

        Ok(query.one(&*self.db).await?.is_some())
    }

    async fn save(&self, faq: &Faq, relations: &RelationPlan) -> Result<Faq> {
        let txn = self.db.begin().await?;

        let active = faq_active_model(faq, chrono::Utc::now());
        let model = if faq.is_new() {
            active.insert(&txn).await?
        } else {
            active.update(&txn).await?
        };

        replace_relations(&txn, model.faq_id, relations).await?;
        txn.commit().await?;

        let mut saved: Faq = model.into();
        saved.stores = relations.stores.clone();
        saved.category_id = relations.category_id;
        Ok(saved)
    }

    async fn delete(&self, faq_id: i32) -> Result<()> {
        let txn = self.db.begin().await?;

        faq_store::Entity::delete_many()
            .filter(faq_store::Column::FaqId.eq(faq_id))
            .exec(&txn)
            .await?;
        faq_category_id::Entity::delete_many()
            .filter(faq_category_id::Column::FaqId.eq(faq_id))
            .exec(&txn)
            .await?;
        delete_faq_rewrites(&txn, faq_id).await?;
        faq::Entity::delete_by_id(faq_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    async fn find_visible(
        &self,
        faq_id: i32,
        store_ids: &[StoreId],
    ) -> Result<Option<FaqStoreView>> {
        let row = faq::Entity::find()
            .select_only()
            .column(faq::Column::FaqId)
            .column(faq::Column::Title)
            .column(faq::Column::Content)
            .column(faq::Column::Identifier)
            .column(faq::Column::IsActive)
            .column(faq_store::Column::StoreId)
            .join(JoinType::LeftJoin, faq::Relation::Stores.def())
            .filter(faq::Column::FaqId.eq(faq_id))
            .filter(faq::Column::IsActive.eq(FaqStatus::Enabled.value()))
            .filter(faq_store::Column::StoreId.is_in(store_ids.iter().copied()))
            // the specific store wins over the default scope
            .order_by_desc(faq_store::Column::StoreId)
            .into_model::<FaqStoreRow>()
            .one(&*self.db)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn find_with_category(&self, faq_id: i32) -> Result<Option<FaqCategoryView>> {
        let row = faq::Entity::find()
            .select_only()
            .column(faq::Column::FaqId)
            .column_as(faq_category_id::Column::CategoryId, "category_id")
            .column_as(faq_category::Column::Title, "title")
            .column_as(faq_category::Column::Identifier, "identifier")
            .join(JoinType::LeftJoin, faq::Relation::CategoryLinks.def())
            .join(JoinType::LeftJoin, faq_category_id::Relation::Category.def())
            .filter(faq::Column::FaqId.eq(faq_id))
            .filter(faq_category::Column::IsActive.eq(FaqStatus::Enabled.value()))
            .order_by_asc(faq_category_id::Column::CategoryId)
            .into_model::<FaqCategoryRow>()
            .one(&*self.db)
            .await?;

        Ok(row.map(Into::into))
    }
}

/// Delete-then-insert of category link, store links and URL rewrites
async fn replace_relations<C>(conn: &C, faq_id: i32, relations: &RelationPlan) -> Result<()>
where
    C: ConnectionTrait,
{
    use sea_orm::ActiveValue::Set;

    faq_category_id::Entity::delete_many()
        .filter(faq_category_id::Column::FaqId.eq(faq_id))
        .exec(conn)
        .await?;
    if let Some((faq_id, category_id)) = relations.category_row(faq_id) {
        faq_category_id::Entity::insert(faq_category_id::ActiveModel {
            faq_id: Set(faq_id),
            category_id: Set(category_id),
        })
        .exec(conn)
        .await?;
    }

    faq_store::Entity::delete_many()
        .filter(faq_store::Column::FaqId.eq(faq_id))
        .exec(conn)
        .await?;
    let store_rows: Vec<faq_store::ActiveModel> = relations
        .store_rows(faq_id)
        .into_iter()
        .map(|(faq_id, store_id)| faq_store::ActiveModel {
            faq_id: Set(faq_id),
            store_id: Set(store_id),
        })
        .collect();
    let store_count = store_rows.len();
    if !store_rows.is_empty() {
        faq_store::Entity::insert_many(store_rows).exec(conn).await?;
    }

    delete_faq_rewrites(conn, faq_id).await?;
    let rewrite_rows: Vec<url_rewrite::ActiveModel> = relations
        .rewrite_rows(faq_id)
        .iter()
        .map(Into::into)
        .collect();
    let rewrite_count = rewrite_rows.len();
    if !rewrite_rows.is_empty() {
        url_rewrite::Entity::insert_many(rewrite_rows).exec(conn).await?;
    }

    tracing::debug!(
        faq_id,
        category = ?relations.category_id,
        stores = store_count,
        rewrites = rewrite_count,
        "Replaced FAQ relations"
    );

    Ok(())
}

async fn delete_faq_rewrites<C>(conn: &C, faq_id: i32) -> Result<()>
where
    C: ConnectionTrait,
{
    url_rewrite::Entity::delete_many()
        .filter(url_rewrite::Column::EntityType.eq(FAQ_QUESTION_ENTITY_TYPE))
        .filter(url_rewrite::Column::EntityId.eq(faq_id))
        .exec(conn)
        .await?;
    Ok(())
}

// ===== Category Repository =====

pub struct SeaOrmFaqCategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFaqCategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FaqCategoryRepository for SeaOrmFaqCategoryRepository {
    async fn save(&self, category: &FaqCategory) -> Result<FaqCategory> {
        let active = category_active_model(category, chrono::Utc::now());
        let model = if matches!(category.category_id, Some(id) if id > 0) {
            active.update(&*self.db).await?
        } else {
            active.insert(&*self.db).await?
        };

        Ok(model.into())
    }

    async fn find_by_id(&self, category_id: i32) -> Result<Option<FaqCategory>> {
        let result = faq_category::Entity::find_by_id(category_id)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<FaqCategory>> {
        let results = faq_category::Entity::find()
            .order_by_asc(faq_category::Column::SortOrder)
            .order_by_asc(faq_category::Column::Title)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn identifier_exists(
        &self,
        identifier: &str,
        exclude_category_id: Option<i32>,
    ) -> Result<bool> {
        let mut query =
            faq_category::Entity::find().filter(faq_category::Column::Identifier.eq(identifier));

        if let Some(category_id) = exclude_category_id {
            query = query.filter(faq_category::Column::CategoryId.ne(category_id));
        }

        Ok(query.count(&*self.db).await? > 0)
    }
}

// ===== URL Rewrite Repository =====

pub struct SeaOrmUrlRewriteRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUrlRewriteRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UrlRewriteRepository for SeaOrmUrlRewriteRepository {
    async fn find_by_request_path(
        &self,
        request_path: &str,
        store_id: StoreId,
    ) -> Result<Option<UrlRewrite>> {
        let result = url_rewrite::Entity::find()
            .filter(url_rewrite::Column::RequestPath.eq(request_path))
            .filter(url_rewrite::Column::StoreId.eq(store_id))
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn find_by_entity(&self, entity_type: &str, entity_id: i32) -> Result<Vec<UrlRewrite>> {
        let results = url_rewrite::Entity::find()
            .filter(url_rewrite::Column::EntityType.eq(entity_type))
            .filter(url_rewrite::Column::EntityId.eq(entity_id))
            .order_by_asc(url_rewrite::Column::StoreId)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}
