//! End-to-end tests over SQLite: module wiring, SeaORM repositories and migrations

use faq_service::contract::*;
use faq_service::domain::Service;
use faq_service::infra::storage::entity::{faq, faq_category_id, faq_store, url_rewrite};
use faq_service::infra::storage::Migrator;
use faq_service::FaqServiceModule;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

mod common;
use common::{config_with, print_test_header, sqlite_db, TestStores};

async fn setup(stores: Vec<faq_service::config::StoreConfig>) -> (Arc<Service>, DatabaseConnection) {
    let db = sqlite_db().await;
    let module = FaqServiceModule::default();
    module
        .init(config_with(stores), db.clone())
        .await
        .expect("Failed to init module");
    (module.service().expect("service initialized"), db)
}

async fn store_rows(db: &DatabaseConnection, faq_id: i32) -> Vec<StoreId> {
    faq_store::Entity::find()
        .filter(faq_store::Column::FaqId.eq(faq_id))
        .order_by_asc(faq_store::Column::StoreId)
        .all(db)
        .await
        .expect("query faq_store")
        .into_iter()
        .map(|row| row.store_id)
        .collect()
}

async fn rewrite_rows(db: &DatabaseConnection, faq_id: i32) -> Vec<url_rewrite::Model> {
    url_rewrite::Entity::find()
        .filter(url_rewrite::Column::EntityType.eq(FAQ_QUESTION_ENTITY_TYPE))
        .filter(url_rewrite::Column::EntityId.eq(faq_id))
        .order_by_asc(url_rewrite::Column::StoreId)
        .all(db)
        .await
        .expect("query url_rewrite")
}

async fn category_links(db: &DatabaseConnection, faq_id: i32) -> Vec<i32> {
    faq_category_id::Entity::find()
        .filter(faq_category_id::Column::FaqId.eq(faq_id))
        .all(db)
        .await
        .expect("query faq_category_id")
        .into_iter()
        .map(|row| row.category_id)
        .collect()
}

#[tokio::test]
async fn test_password_reset_example_on_single_store() {
    let (service, db) = setup(TestStores::single()).await;

    print_test_header(
        "test_password_reset_example_on_single_store",
        &[
            "Saving 'How do I reset my password?' on a single-store install writes",
            "one default-scope store row and one url_rewrite row.",
        ],
    );

    let saved = service
        .save_faq(Faq::new("How do I reset my password?", "Use the reset link."))
        .await
        .expect("Failed to save FAQ");
    let faq_id = saved.faq_id.expect("saved FAQ has an id");

    let row = faq::Entity::find_by_id(faq_id)
        .one(&db)
        .await
        .expect("query faq")
        .expect("faq row exists");
    assert_eq!(row.identifier, "how-do-i-reset-my-password");
    assert_eq!(row.is_active, 1);

    assert_eq!(store_rows(&db, faq_id).await, vec![0]);

    let rewrites = rewrite_rows(&db, faq_id).await;
    assert_eq!(rewrites.len(), 1);
    assert_eq!(rewrites[0].request_path, "faq/how-do-i-reset-my-password.html");
    assert_eq!(
        rewrites[0].target_path,
        format!("faq/question/view/faq_id/{}", faq_id)
    );
    assert_eq!(rewrites[0].redirect_type, 0);
    assert_eq!(rewrites[0].is_autogenerated, 1);
}

#[tokio::test]
async fn test_load_round_trips_assignments() {
    let (service, _db) = setup(TestStores::multi()).await;

    print_test_header(
        "test_load_round_trips_assignments",
        &["load_faq and list_faqs return stored store and category assignments."],
    );

    let category_id = service
        .save_category(FaqCategory::new("Delivery"))
        .await
        .expect("Failed to save category")
        .category_id
        .expect("saved category has an id");

    let faq_id = service
        .save_faq(
            Faq::new("When does my parcel arrive?", "Soon.")
                .with_stores([2, 1])
                .with_category(category_id),
        )
        .await
        .expect("Failed to save FAQ")
        .faq_id
        .expect("saved FAQ has an id");

    let loaded = service.load_faq(faq_id).await.expect("Failed to load FAQ");
    assert_eq!(loaded.stores, vec![1, 2]);
    assert_eq!(loaded.category_id, Some(category_id));
    assert!(loaded.created_at.is_some());

    let listed = service.list_faqs().await.expect("Failed to list FAQs");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].stores, vec![1, 2]);
    assert_eq!(listed[0].category_id, Some(category_id));
}

#[tokio::test]
async fn test_identifier_uniqueness_per_store_set() {
    let (service, db) = setup(TestStores::multi()).await;

    print_test_header(
        "test_identifier_uniqueness_per_store_set",
        &["Disjoint store sets share a URL key; overlapping ones are rejected."],
    );
    TestStores::print_structure(&TestStores::multi());

    service
        .save_faq(Faq::new("Returns", "EN").with_identifier("returns").with_stores([1]))
        .await
        .expect("Failed to save FAQ for store 1");
    service
        .save_faq(Faq::new("Retours", "FR").with_identifier("returns").with_stores([2]))
        .await
        .expect("Disjoint store sets must not conflict");

    let err = service
        .save_faq(Faq::new("Returns", "ALL").with_identifier("returns").with_stores([0]))
        .await
        .expect_err("Default scope overlaps both stores");
    assert!(matches!(err, FaqError::DuplicateIdentifier { .. }));

    let count = faq::Entity::find().all(&db).await.expect("query faq").len();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_numeric_identifier_writes_nothing() {
    let (service, db) = setup(TestStores::single()).await;

    print_test_header(
        "test_numeric_identifier_writes_nothing",
        &["'12345' is rejected before any row is written."],
    );

    let err = service
        .save_faq(Faq::new("Numbers", "...").with_identifier("12345"))
        .await
        .expect_err("Numeric URL key must be rejected");
    assert!(matches!(err, FaqError::NumericIdentifier { .. }));

    assert!(faq::Entity::find().all(&db).await.expect("query").is_empty());
    assert!(url_rewrite::Entity::find()
        .all(&db)
        .await
        .expect("query")
        .is_empty());
}

#[tokio::test]
async fn test_resave_replaces_relations_exactly() {
    let (service, db) = setup(TestStores::multi()).await;

    print_test_header(
        "test_resave_replaces_relations_exactly",
        &[
            "Store rows, category link and rewrites match the latest save;",
            "rows from the previous save are fully removed.",
        ],
    );

    println!("\n📝 Stage 1: Save for all stores in category 5");
    let saved = service
        .save_faq(Faq::new("Size guide", "...").with_stores([0]).with_category(5))
        .await
        .expect("Failed to save FAQ");
    let faq_id = saved.faq_id.expect("saved FAQ has an id");

    assert_eq!(store_rows(&db, faq_id).await, vec![0, 1, 2]);
    assert_eq!(category_links(&db, faq_id).await, vec![5]);
    let paths: Vec<(i32, String)> = rewrite_rows(&db, faq_id)
        .await
        .into_iter()
        .map(|r| (r.store_id, r.request_path))
        .collect();
    assert_eq!(
        paths,
        vec![
            (1, "faq/size-guide.html".to_string()),
            (2, "faq/size-guide.html".to_string()),
        ]
    );

    println!("\n📝 Stage 2: Re-save for store 2 only, new key, category 6");
    let mut update = service.load_faq(faq_id).await.expect("Failed to load FAQ");
    update.stores = vec![2];
    update.identifier = "sizes".to_string();
    update.category_id = Some(6);
    service.save_faq(update).await.expect("Failed to update FAQ");

    assert_eq!(store_rows(&db, faq_id).await, vec![2]);
    assert_eq!(category_links(&db, faq_id).await, vec![6]);
    let rewrites = rewrite_rows(&db, faq_id).await;
    assert_eq!(rewrites.len(), 1);
    assert_eq!(rewrites[0].store_id, 2);
    assert_eq!(rewrites[0].request_path, "faq/sizes.html");

    println!("\n📝 Stage 3: Re-save without category");
    let mut update = service.load_faq(faq_id).await.expect("Failed to load FAQ");
    update.category_id = None;
    service.save_faq(update).await.expect("Failed to update FAQ");
    assert!(category_links(&db, faq_id).await.is_empty());
}

#[tokio::test]
async fn test_get_faq_store_lookups() {
    let (service, _db) = setup(TestStores::multi()).await;

    print_test_header(
        "test_get_faq_store_lookups",
        &["Visibility lookups against the store rows and the active flag."],
    );

    let everywhere = service
        .save_faq(Faq::new("Everywhere", "...").with_stores([0]))
        .await
        .expect("Failed to save FAQ")
        .faq_id
        .expect("saved FAQ has an id");
    let french = service
        .save_faq(Faq::new("French only", "...").with_stores([2]))
        .await
        .expect("Failed to save FAQ")
        .faq_id
        .expect("saved FAQ has an id");
    let disabled = service
        .save_faq(
            Faq::new("Disabled", "...")
                .with_stores([0])
                .with_status(FaqStatus::Disabled),
        )
        .await
        .expect("Failed to save FAQ")
        .faq_id
        .expect("saved FAQ has an id");

    assert!(service.get_faq_store(0).await.expect("lookup").is_none());
    assert!(service.get_faq_store(-1).await.expect("lookup").is_none());
    assert!(service.get_faq_store(12345).await.expect("lookup").is_none());
    assert!(service.get_faq_store(disabled).await.expect("lookup").is_none());

    // current store defaults to store 1
    assert!(service.get_faq_store(french).await.expect("lookup").is_none());
    let view = service
        .get_faq_store_in(french, 2)
        .await
        .expect("lookup")
        .expect("visible in store 2");
    assert_eq!(view.store_id, 2);
    assert_eq!(view.title, "French only");
    assert_eq!(view.status, FaqStatus::Enabled);

    let view = service
        .get_faq_store(everywhere)
        .await
        .expect("lookup")
        .expect("visible in store 1");
    assert_eq!(view.store_id, 1);
}

#[tokio::test]
async fn test_get_faq_category_requires_active_category() {
    let (service, _db) = setup(TestStores::single()).await;

    print_test_header(
        "test_get_faq_category_requires_active_category",
        &["The category join returns nothing for missing or disabled categories."],
    );

    let category = service
        .save_category(FaqCategory::new("Billing").with_identifier("billing"))
        .await
        .expect("Failed to save category");
    let category_id = category.category_id.expect("saved category has an id");

    let linked = service
        .save_faq(Faq::new("Invoice copy", "...").with_category(category_id))
        .await
        .expect("Failed to save FAQ")
        .faq_id
        .expect("saved FAQ has an id");
    let dangling = service
        .save_faq(Faq::new("Old link", "...").with_category(999))
        .await
        .expect("Failed to save FAQ")
        .faq_id
        .expect("saved FAQ has an id");
    let unlinked = service
        .save_faq(Faq::new("No category", "..."))
        .await
        .expect("Failed to save FAQ")
        .faq_id
        .expect("saved FAQ has an id");

    let view = service
        .get_faq_category(linked)
        .await
        .expect("lookup")
        .expect("category attached");
    assert_eq!(view.category_id, category_id);
    assert_eq!(view.title, "Billing");
    assert_eq!(view.identifier, "billing");

    assert!(service.get_faq_category(dangling).await.expect("lookup").is_none());
    assert!(service.get_faq_category(unlinked).await.expect("lookup").is_none());

    let mut disabled = category;
    disabled.status = FaqStatus::Disabled;
    service
        .save_category(disabled)
        .await
        .expect("Failed to disable category");
    assert!(service.get_faq_category(linked).await.expect("lookup").is_none());
}

#[tokio::test]
async fn test_categories_are_listed_by_sort_order() {
    let (service, _db) = setup(TestStores::single()).await;

    print_test_header(
        "test_categories_are_listed_by_sort_order",
        &["Categories list by sort order, then title; keys stay unique."],
    );

    for (title, sort_order) in [("Shipping", 2), ("Account", 1), ("Billing", 1)] {
        let mut category = FaqCategory::new(title);
        category.sort_order = sort_order;
        service
            .save_category(category)
            .await
            .expect("Failed to save category");
    }

    let titles: Vec<String> = service
        .list_categories()
        .await
        .expect("list")
        .into_iter()
        .map(|c| c.title)
        .collect();
    assert_eq!(titles, vec!["Account", "Billing", "Shipping"]);

    let err = service
        .save_category(FaqCategory::new("Account"))
        .await
        .expect_err("Duplicate category key");
    assert!(matches!(err, FaqError::DuplicateIdentifier { .. }));
}

#[tokio::test]
async fn test_delete_removes_all_rows() {
    let (service, db) = setup(TestStores::multi()).await;

    print_test_header(
        "test_delete_removes_all_rows",
        &["Deleting a FAQ removes its row, store rows, category link and rewrites."],
    );

    let faq_id = service
        .save_faq(Faq::new("Short lived", "...").with_stores([1, 2]).with_category(3))
        .await
        .expect("Failed to save FAQ")
        .faq_id
        .expect("saved FAQ has an id");

    service.delete_faq(faq_id).await.expect("Failed to delete FAQ");

    assert!(faq::Entity::find_by_id(faq_id)
        .one(&db)
        .await
        .expect("query")
        .is_none());
    assert!(store_rows(&db, faq_id).await.is_empty());
    assert!(category_links(&db, faq_id).await.is_empty());
    assert!(rewrite_rows(&db, faq_id).await.is_empty());
}

#[tokio::test]
async fn test_request_path_routing() {
    let (service, _db) = setup(TestStores::multi()).await;

    print_test_header(
        "test_request_path_routing",
        &["Generated request paths resolve per store to the FAQ detail page."],
    );

    let faq_id = service
        .save_faq(Faq::new("Opening hours", "9 to 5").with_stores([1]))
        .await
        .expect("Failed to save FAQ")
        .faq_id
        .expect("saved FAQ has an id");

    let rewrite = service
        .resolve_request_path("faq/opening-hours.html", 1)
        .await
        .expect("lookup")
        .expect("rewrite for store 1");
    assert_eq!(rewrite.entity_type, FAQ_QUESTION_ENTITY_TYPE);
    assert_eq!(rewrite.entity_id, faq_id);

    let view = service
        .view_by_request_path("/faq/opening-hours.html", 1)
        .await
        .expect("lookup")
        .expect("visible in store 1");
    assert_eq!(view.faq_id, faq_id);

    assert!(service
        .view_by_request_path("faq/opening-hours.html", 2)
        .await
        .expect("lookup")
        .is_none());

    let rewrites = service.faq_rewrites(faq_id).await.expect("rewrites");
    assert_eq!(rewrites.len(), 1);
    assert!(rewrites[0].url_rewrite_id.is_some());
}

#[tokio::test]
async fn test_migrations_are_recorded_once_each() {
    print_test_header(
        "test_migrations_are_recorded_once_each",
        &["Every migration has its own name, so repeated runs are no-ops."],
    );

    let db = sqlite_db().await;
    FaqServiceModule::default()
        .migrate(&db)
        .await
        .expect("Second migration run must succeed");

    let applied = Migrator::get_applied_migrations(&db)
        .await
        .expect("Failed to read applied migrations");
    let names: Vec<&str> = applied.iter().map(|m| m.name()).collect();
    println!("   applied: {:?}", names);

    assert_eq!(
        names,
        vec![
            "m20250301_000001_create_faq",
            "m20250301_000002_create_faq_category",
            "m20250301_000003_create_url_rewrite",
        ]
    );
}

#[tokio::test]
async fn test_module_requires_init() {
    print_test_header(
        "test_module_requires_init",
        &["The module exposes no service, client or routes before init."],
    );

    let module = FaqServiceModule::default();
    assert!(module.service().is_err());
    assert!(module.client().is_err());
    assert!(module.register_rest(axum::Router::new()).is_err());
}

#[tokio::test]
async fn test_module_rejects_invalid_store_config() {
    print_test_header(
        "test_module_rejects_invalid_store_config",
        &["init validates store definitions before wiring anything."],
    );

    let db = sqlite_db().await;
    let mut stores = TestStores::multi();
    stores[1].store_id = 1;

    let module = FaqServiceModule::default();
    assert!(module.init(config_with(stores), db).await.is_err());
    assert!(module.service().is_err());
}

#[tokio::test]
async fn test_native_client_delegates_to_service() {
    print_test_header(
        "test_native_client_delegates_to_service",
        &["The in-process FaqApi client reaches the same storage as the service."],
    );

    let db = sqlite_db().await;
    let module = FaqServiceModule::default();
    module
        .init(config_with(TestStores::single()), db)
        .await
        .expect("Failed to init module");
    assert_eq!(module.config().stores.len(), 1);
    let client = module.client().expect("client available");

    let saved = client
        .save_faq(Faq::new("Client call", "..."))
        .await
        .expect("Failed to save FAQ");
    let faq_id = saved.faq_id.expect("saved FAQ has an id");

    let loaded = client.load_faq(faq_id).await.expect("Failed to load FAQ");
    assert_eq!(loaded.identifier, "client-call");
    assert!(client
        .get_faq_store(faq_id)
        .await
        .expect("lookup")
        .is_some());
    assert!(client
        .resolve_request_path("faq/client-call.html", 1)
        .await
        .expect("lookup")
        .is_some());

    client.delete_faq(faq_id).await.expect("Failed to delete FAQ");
    assert!(client.list_faqs().await.expect("list").is_empty());
}
