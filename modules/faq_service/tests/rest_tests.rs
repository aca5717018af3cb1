//! REST API tests driving the axum router over a SQLite-backed module

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use faq_service::FaqServiceModule;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;
use common::{config_with, print_test_header, sqlite_db, TestStores};

async fn app(stores: Vec<faq_service::config::StoreConfig>) -> Router {
    let db = sqlite_db().await;
    let module = FaqServiceModule::default();
    module
        .init(config_with(stores), db)
        .await
        .expect("Failed to init module");
    module
        .register_rest(Router::new())
        .expect("Failed to register routes")
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    let response = app.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    println!("   {} {} -> {} {}", method, uri, status, value);
    (status, value)
}

#[tokio::test]
async fn test_create_and_fetch_faq() {
    let app = app(TestStores::single()).await;

    print_test_header(
        "test_create_and_fetch_faq",
        &["POST /faqs creates a FAQ with a generated key; GET returns it."],
    );

    let (status, created) = send(
        &app,
        "POST",
        "/faqs",
        Some(json!({ "title": "How do I reset my password?", "content": "Use the link." })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["identifier"], "how-do-i-reset-my-password");
    assert_eq!(created["stores"], json!([0]));
    assert_eq!(created["is_active"], true);

    let faq_id = created["faq_id"].as_i64().expect("faq_id");
    let (status, fetched) = send(&app, "GET", &format!("/faqs/{}", faq_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "How do I reset my password?");

    let (status, rewrites) = send(&app, "GET", &format!("/faqs/{}/rewrites", faq_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        rewrites[0]["request_path"],
        "faq/how-do-i-reset-my-password.html"
    );

    let (status, list) = send(&app, "GET", "/faqs", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
}

#[tokio::test]
async fn test_save_errors_map_to_problem_details() {
    let app = app(TestStores::multi()).await;

    print_test_header(
        "test_save_errors_map_to_problem_details",
        &["Rejected saves answer 400 with the user-facing message as detail."],
    );

    let (status, _) = send(
        &app,
        "POST",
        "/faqs",
        Some(json!({ "title": "Shipping", "identifier": "shipping", "stores": [1] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, problem) = send(
        &app,
        "POST",
        "/faqs",
        Some(json!({ "title": "Shipping", "identifier": "shipping", "stores": [0] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(problem["detail"], "URL key for specified store already exists.");
    assert_eq!(problem["status"], 400);
    assert_eq!(problem["identifier"], "shipping");
    assert!(problem.get("instance").is_none());

    let (status, problem) = send(
        &app,
        "POST",
        "/faqs",
        Some(json!({ "title": "Order", "identifier": "12345", "stores": [2] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        problem["detail"],
        "The faq URL key cannot be made of only numbers."
    );
}

#[tokio::test]
async fn test_update_and_delete_faq() {
    let app = app(TestStores::multi()).await;

    print_test_header(
        "test_update_and_delete_faq",
        &["PUT replaces a FAQ; DELETE removes it; unknown ids are 404."],
    );

    let (_, created) = send(
        &app,
        "POST",
        "/faqs",
        Some(json!({ "title": "Gift cards", "stores": [1, 2] })),
    )
    .await;
    let faq_id = created["faq_id"].as_i64().expect("faq_id");

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/faqs/{}", faq_id),
        Some(json!({ "title": "Gift cards", "identifier": "gift-cards", "stores": [2], "is_active": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["stores"], json!([2]));
    assert_eq!(updated["is_active"], false);

    let (status, _) = send(&app, "PUT", "/faqs/0", Some(json!({ "title": "Nope" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/faqs/{}", faq_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, problem) = send(&app, "GET", &format!("/faqs/{}", faq_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(problem["status"], 404);
}

#[tokio::test]
async fn test_store_and_category_views() {
    let app = app(TestStores::multi()).await;

    print_test_header(
        "test_store_and_category_views",
        &["Store visibility and category joins over HTTP."],
    );

    let (status, category) = send(
        &app,
        "POST",
        "/faq-categories",
        Some(json!({ "title": "Account" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["identifier"], "account");
    let category_id = category["category_id"].as_i64().expect("category_id");

    let (_, created) = send(
        &app,
        "POST",
        "/faqs",
        Some(json!({ "title": "Change email", "stores": [2], "category_id": category_id })),
    )
    .await;
    let faq_id = created["faq_id"].as_i64().expect("faq_id");

    let (status, _) = send(&app, "GET", &format!("/faqs/{}/store", faq_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, view) = send(
        &app,
        "GET",
        &format!("/faqs/{}/store?store_id=2", faq_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["store_id"], 2);

    let (status, view) = send(&app, "GET", &format!("/faqs/{}/category", faq_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["title"], "Account");
    assert_eq!(view["category_id"], category_id);

    let (status, list) = send(&app, "GET", "/faq-categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/faq-categories/{}", category_id),
        Some(json!({ "title": "Account", "identifier": "my-account", "sort_order": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["identifier"], "my-account");
    assert_eq!(updated["sort_order"], 3);

    let (status, _) = send(&app, "GET", "/faq-categories/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_storefront_routes() {
    let app = app(TestStores::multi()).await;

    print_test_header(
        "test_storefront_routes",
        &["Generated request paths and the question view route serve the FAQ."],
    );

    let (_, created) = send(
        &app,
        "POST",
        "/faqs",
        Some(json!({ "title": "Opening hours", "content": "9 to 5", "stores": [1] })),
    )
    .await;
    let faq_id = created["faq_id"].as_i64().expect("faq_id");

    let (status, view) = send(&app, "GET", "/faq/opening-hours.html", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["faq_id"], faq_id);
    assert_eq!(view["content"], "9 to 5");

    let (status, _) = send(&app, "GET", "/faq/opening-hours.html?store_id=2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, view) = send(
        &app,
        "GET",
        &format!("/faq/question/view/faq_id/{}", faq_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["identifier"], "opening-hours");

    let (status, _) = send(&app, "GET", "/faq/unknown.html", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_statuses_and_openapi() {
    let app = app(TestStores::single()).await;

    print_test_header(
        "test_statuses_and_openapi",
        &["Status options and the OpenAPI document are served."],
    );

    let (status, options) = send(&app, "GET", "/faq-statuses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        options,
        json!([{ "value": 1, "label": "Active" }, { "value": 0, "label": "InActive" }])
    );

    let (status, doc) = send(&app, "GET", "/faq-api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/faqs"].is_object());
    assert!(doc["components"]["schemas"]["FaqDto"].is_object());
}

#[tokio::test]
async fn test_question_path_on_api_route_is_rejected() {
    print_test_header(
        "test_question_path_on_api_route_is_rejected",
        &["A question path shadowing an API route fails init instead of the router build."],
    );

    for question_path in ["faqs", "faq-categories", "faq-statuses", "faq-api"] {
        let mut config = config_with(TestStores::single());
        config.question_path = question_path.to_string();

        let module = FaqServiceModule::default();
        let result = module.init(config, sqlite_db().await).await;
        println!("   {} -> {:?}", question_path, result.as_ref().err());
        assert!(result.is_err());
        assert!(module.register_rest(Router::new()).is_err());
    }
}
