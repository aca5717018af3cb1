//! Route registration with utoipa OpenAPI documentation

use super::{dto::*, error::Problem, handlers};
use crate::domain::relations::QUESTION_VIEW_ROUTE;
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI document of the FAQ REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FAQ Service API",
        description = "FAQs, categories, store visibility and SEO URL rewrites"
    ),
    paths(
        handlers::list_faqs,
        handlers::get_faq,
        handlers::create_faq,
        handlers::update_faq,
        handlers::delete_faq,
        handlers::get_faq_store,
        handlers::get_faq_category,
        handlers::list_faq_rewrites,
        handlers::list_statuses,
        handlers::list_categories,
        handlers::get_category,
        handlers::create_category,
        handlers::update_category,
    ),
    components(schemas(
        FaqDto,
        SaveFaqRequest,
        FaqStoreViewDto,
        FaqCategoryViewDto,
        UrlRewriteDto,
        FaqCategoryDto,
        SaveCategoryRequest,
        StatusOptionDto,
        FaqListResponse,
        FaqCategoryListResponse,
    )),
    tags(
        (name = "faq", description = "FAQ management"),
        (name = "faq-category", description = "FAQ category management")
    )
)]
pub struct ApiDoc;

/// Register all REST routes with OpenAPI documentation
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    service.rewrite_paths().check_question_path()?;
    let question_path = service.rewrite_paths().question_path.trim_matches('/').to_string();

    let router = router
        // FAQ endpoints
        .route("/faqs", get(list_faqs_handler).post(create_faq_handler))
        .route(
            "/faqs/{faq_id}",
            get(get_faq_handler)
                .put(update_faq_handler)
                .delete(delete_faq_handler),
        )
        .route("/faqs/{faq_id}/store", get(get_faq_store_handler))
        .route("/faqs/{faq_id}/category", get(get_faq_category_handler))
        .route("/faqs/{faq_id}/rewrites", get(list_faq_rewrites_handler))
        .route("/faq-statuses", get(handlers::list_statuses))
        // Category endpoints
        .route(
            "/faq-categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route(
            "/faq-categories/{category_id}",
            get(get_category_handler).put(update_category_handler),
        )
        // Storefront endpoints
        .route(
            &format!("/{QUESTION_VIEW_ROUTE}/{{faq_id}}"),
            get(view_question_handler),
        )
        .route(
            &format!("/{question_path}/{{request}}"),
            get(view_by_request_handler),
        )
        .route("/faq-api/openapi.json", get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    tracing::debug!(%question_path, "FAQ routes registered");
    Ok(router)
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_faqs_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<FaqListResponse>, Problem> {
    handlers::list_faqs(service).await
}

async fn get_faq_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<FaqDto>, Problem> {
    handlers::get_faq(service, path).await
}

async fn create_faq_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<SaveFaqRequest>,
) -> Result<(StatusCode, Json<FaqDto>), Problem> {
    handlers::create_faq(service, json).await
}

async fn update_faq_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
    json: Json<SaveFaqRequest>,
) -> Result<Json<FaqDto>, Problem> {
    handlers::update_faq(service, path, json).await
}

async fn delete_faq_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<StatusCode, Problem> {
    handlers::delete_faq(service, path).await
}

async fn get_faq_store_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
    query: Query<StoreQuery>,
) -> Result<Json<FaqStoreViewDto>, Problem> {
    handlers::get_faq_store(service, path, query).await
}

async fn get_faq_category_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<FaqCategoryViewDto>, Problem> {
    handlers::get_faq_category(service, path).await
}

async fn list_faq_rewrites_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<Vec<UrlRewriteDto>>, Problem> {
    handlers::list_faq_rewrites(service, path).await
}

async fn list_categories_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<FaqCategoryListResponse>, Problem> {
    handlers::list_categories(service).await
}

async fn get_category_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<FaqCategoryDto>, Problem> {
    handlers::get_category(service, path).await
}

async fn create_category_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<SaveCategoryRequest>,
) -> Result<(StatusCode, Json<FaqCategoryDto>), Problem> {
    handlers::create_category(service, json).await
}

async fn update_category_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
    json: Json<SaveCategoryRequest>,
) -> Result<Json<FaqCategoryDto>, Problem> {
    handlers::update_category(service, path, json).await
}

async fn view_question_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
    query: Query<StoreQuery>,
) -> Result<Json<FaqStoreViewDto>, Problem> {
    handlers::view_question(service, path, query).await
}

async fn view_by_request_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<String>,
    query: Query<StoreQuery>,
) -> Result<Json<FaqStoreViewDto>, Problem> {
    handlers::view_by_request(service, path, query).await
}
