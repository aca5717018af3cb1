//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::{FaqError, FaqStatus};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

// ===== FAQ Handlers =====

/// List FAQs
#[utoipa::path(
    get,
    path = "/faqs",
    responses((status = 200, description = "Success", body = FaqListResponse)),

    tag = "faq"
)]
pub async fn list_faqs(service: Arc<Service>) -> Result<Json<FaqListResponse>, Problem> {
    let faqs = service.list_faqs().await.map_err(map_domain_error)?;

    let items: Vec<FaqDto> = faqs.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(FaqListResponse { items, total }))
}

/// Get a FAQ
#[utoipa::path(
    get,
    path = "/faqs/{faq_id}",
    params(("faq_id" = i32, Path)),
    responses(
        (status = 200, description = "Success", body = FaqDto),
        (status = 404, description = "Not found"),
    ),
    tag = "faq"
)]
pub async fn get_faq(
    service: Arc<Service>,
    Path(faq_id): Path<i32>,
) -> Result<Json<FaqDto>, Problem> {
    let faq = service.load_faq(faq_id).await.map_err(map_domain_error)?;

    Ok(Json(faq.into()))
}

/// Create a FAQ
#[utoipa::path(
    post,
    path = "/faqs",
    request_body = SaveFaqRequest,
    responses(
        (status = 201, description = "Created", body = FaqDto),
        (status = 400, description = "Invalid input"),
    ),
    tag = "faq"
)]
pub async fn create_faq(
    service: Arc<Service>,
    Json(req): Json<SaveFaqRequest>,
) -> Result<(StatusCode, Json<FaqDto>), Problem> {
    let faq = service
        .save_faq(req.into_faq(None))
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(faq.into())))
}

/// Update a FAQ
#[utoipa::path(
    put,
    path = "/faqs/{faq_id}",
    params(("faq_id" = i32, Path)),
    request_body = SaveFaqRequest,
    responses(
        (status = 200, description = "Success", body = FaqDto),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Not found"),
    ),
    tag = "faq"
)]
pub async fn update_faq(
    service: Arc<Service>,
    Path(faq_id): Path<i32>,
    Json(req): Json<SaveFaqRequest>,
) -> Result<Json<FaqDto>, Problem> {
    // a non-positive path id must not turn the update into a create
    if faq_id <= 0 {
        return Err(map_domain_error(FaqError::not_found("faq", faq_id)));
    }

    let faq = service
        .save_faq(req.into_faq(Some(faq_id)))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(faq.into()))
}

/// Delete a FAQ
#[utoipa::path(
    delete,
    path = "/faqs/{faq_id}",
    params(("faq_id" = i32, Path)),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found"),
    ),
    tag = "faq"
)]
pub async fn delete_faq(
    service: Arc<Service>,
    Path(faq_id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service.delete_faq(faq_id).await.map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// FAQ visible in a store
#[utoipa::path(
    get,
    path = "/faqs/{faq_id}/store",
    params(("faq_id" = i32, Path), ("store_id" = Option<i32>, Query)),
    responses(
        (status = 200, description = "Success", body = FaqStoreViewDto),
        (status = 404, description = "Not found"),
    ),
    tag = "faq"
)]
pub async fn get_faq_store(
    service: Arc<Service>,
    Path(faq_id): Path<i32>,
    Query(query): Query<StoreQuery>,
) -> Result<Json<FaqStoreViewDto>, Problem> {
    let store_id = query.store_id.unwrap_or_else(|| service.current_store_id());
    let view = service
        .get_faq_store_in(faq_id, store_id)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| {
            Problem::not_found(format!("faq {} is not visible in store {}", faq_id, store_id))
        })?;

    Ok(Json(view.into()))
}

/// FAQ joined to its active category
#[utoipa::path(
    get,
    path = "/faqs/{faq_id}/category",
    params(("faq_id" = i32, Path)),
    responses(
        (status = 200, description = "Success", body = FaqCategoryViewDto),
        (status = 404, description = "Not found"),
    ),
    tag = "faq"
)]
pub async fn get_faq_category(
    service: Arc<Service>,
    Path(faq_id): Path<i32>,
) -> Result<Json<FaqCategoryViewDto>, Problem> {
    let view = service
        .get_faq_category(faq_id)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| Problem::not_found(format!("faq {} has no active category", faq_id)))?;

    Ok(Json(view.into()))
}

/// URL rewrites owned by a FAQ
#[utoipa::path(
    get,
    path = "/faqs/{faq_id}/rewrites",
    params(("faq_id" = i32, Path)),
    responses((status = 200, description = "Success", body = Vec<UrlRewriteDto>)),

    tag = "faq"
)]
pub async fn list_faq_rewrites(
    service: Arc<Service>,
    Path(faq_id): Path<i32>,
) -> Result<Json<Vec<UrlRewriteDto>>, Problem> {
    let rewrites = service.faq_rewrites(faq_id).await.map_err(map_domain_error)?;

    Ok(Json(rewrites.into_iter().map(Into::into).collect()))
}

/// Options of the status select
#[utoipa::path(
    get,
    path = "/faq-statuses",
    responses((status = 200, description = "Success", body = Vec<StatusOptionDto>)),

    tag = "faq"
)]
pub async fn list_statuses() -> Json<Vec<StatusOptionDto>> {
    Json(FaqStatus::options().into_iter().map(Into::into).collect())
}

// ===== Category Handlers =====

/// List categories
#[utoipa::path(
    get,
    path = "/faq-categories",
    responses((status = 200, description = "Success", body = FaqCategoryListResponse)),

    tag = "faq-category"
)]
pub async fn list_categories(
    service: Arc<Service>,
) -> Result<Json<FaqCategoryListResponse>, Problem> {
    let categories = service.list_categories().await.map_err(map_domain_error)?;

    let items: Vec<FaqCategoryDto> = categories.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(FaqCategoryListResponse { items, total }))
}

/// Get a category
#[utoipa::path(
    get,
    path = "/faq-categories/{category_id}",
    params(("category_id" = i32, Path)),
    responses(
        (status = 200, description = "Success", body = FaqCategoryDto),
        (status = 404, description = "Not found"),
    ),
    tag = "faq-category"
)]
pub async fn get_category(
    service: Arc<Service>,
    Path(category_id): Path<i32>,
) -> Result<Json<FaqCategoryDto>, Problem> {
    let category = service
        .load_category(category_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(category.into()))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/faq-categories",
    request_body = SaveCategoryRequest,
    responses(
        (status = 201, description = "Created", body = FaqCategoryDto),
        (status = 400, description = "Invalid input"),
    ),
    tag = "faq-category"
)]
pub async fn create_category(
    service: Arc<Service>,
    Json(req): Json<SaveCategoryRequest>,
) -> Result<(StatusCode, Json<FaqCategoryDto>), Problem> {
    let category = service
        .save_category(req.into_category(None))
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/faq-categories/{category_id}",
    params(("category_id" = i32, Path)),
    request_body = SaveCategoryRequest,
    responses(
        (status = 200, description = "Success", body = FaqCategoryDto),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Not found"),
    ),
    tag = "faq-category"
)]
pub async fn update_category(
    service: Arc<Service>,
    Path(category_id): Path<i32>,
    Json(req): Json<SaveCategoryRequest>,
) -> Result<Json<FaqCategoryDto>, Problem> {
    if category_id <= 0 {
        return Err(map_domain_error(FaqError::not_found("faq_category", category_id)));
    }

    let category = service
        .save_category(req.into_category(Some(category_id)))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(category.into()))
}

// ===== Storefront Handlers =====

/// FAQ detail page behind the rewrite target path
pub async fn view_question(
    service: Arc<Service>,
    Path(faq_id): Path<i32>,
    Query(query): Query<StoreQuery>,
) -> Result<Json<FaqStoreViewDto>, Problem> {
    get_faq_store(service, Path(faq_id), Query(query)).await
}

/// FAQ detail page behind a generated request path
pub async fn view_by_request(
    service: Arc<Service>,
    Path(request): Path<String>,
    Query(query): Query<StoreQuery>,
) -> Result<Json<FaqStoreViewDto>, Problem> {
    let store_id = query.store_id.unwrap_or_else(|| service.current_store_id());
    let request_path = format!(
        "{}/{}",
        service.rewrite_paths().question_path.trim_matches('/'),
        request
    );

    let view = service
        .view_by_request_path(&request_path, store_id)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| Problem::not_found(format!("no FAQ at '{}'", request_path)))?;

    Ok(Json(view.into()))
}
