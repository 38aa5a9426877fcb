use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};

use crate::{
    dto::categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
    error::AppResult,
    middleware::auth::AdminSession,
    models::ProductCategory,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::category_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/{id}", put(update_category).delete(delete_category))
}

#[utoipa::path(
    get,
    path = "/api/admin/categories",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List categories", body = ApiResponse<CategoryList>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    let resp = category_service::list_categories(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<ProductCategory>),
        (status = 409, description = "Duplicate name"),
    ),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<Json<ApiResponse<ProductCategory>>> {
    let category = category_service::create_category(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Category created",
        category,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<ProductCategory>),
        (status = 404, description = "Not found"),
    ),
    tag = "Categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> AppResult<Json<ApiResponse<ProductCategory>>> {
    let category = category_service::update_category(&state, id, payload).await?;
    Ok(Json(ApiResponse::success(
        "Category updated",
        category,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Not found"),
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    category_service::delete_category(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
