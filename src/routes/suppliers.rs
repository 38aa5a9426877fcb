use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::suppliers::{CreateSupplierRequest, SupplierList, UpdateSupplierRequest},
    error::AppResult,
    middleware::auth::AdminSession,
    models::Supplier,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::supplier_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route(
            "/{id}",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
}

#[utoipa::path(
    get,
    path = "/api/admin/suppliers",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List suppliers", body = ApiResponse<SupplierList>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Suppliers"
)]
pub async fn list_suppliers(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<SupplierList>>> {
    let resp = supplier_service::list_suppliers(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/suppliers/{id}",
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "Supplier", body = ApiResponse<Supplier>),
        (status = 404, description = "Not found"),
    ),
    tag = "Suppliers"
)]
pub async fn get_supplier(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let supplier = supplier_service::get_supplier(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Supplier",
        supplier,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/api/admin/suppliers",
    request_body = CreateSupplierRequest,
    responses(
        (status = 200, description = "Supplier created", body = ApiResponse<Supplier>),
        (status = 409, description = "Duplicate name or email"),
    ),
    tag = "Suppliers"
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(payload): Json<CreateSupplierRequest>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let supplier = supplier_service::create_supplier(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Supplier created",
        supplier,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/suppliers/{id}",
    params(("id" = i32, Path, description = "Supplier ID")),
    request_body = UpdateSupplierRequest,
    responses(
        (status = 200, description = "Supplier updated", body = ApiResponse<Supplier>),
        (status = 404, description = "Not found"),
    ),
    tag = "Suppliers"
)]
pub async fn update_supplier(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSupplierRequest>,
) -> AppResult<Json<ApiResponse<Supplier>>> {
    let supplier = supplier_service::update_supplier(&state, id, payload).await?;
    Ok(Json(ApiResponse::success(
        "Supplier updated",
        supplier,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/suppliers/{id}",
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "Supplier deleted"),
        (status = 404, description = "Not found"),
    ),
    tag = "Suppliers"
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    supplier_service::delete_supplier(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
