use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};

use crate::{
    dto::services::{CreateServiceRequest, ServiceList, UpdateServiceRequest},
    error::AppResult,
    middleware::auth::AdminSession,
    models::ServiceItem,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::service_item_service,
    state::AppState,
};

// The public catalog only exposes the read side; mutations live under /admin.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_services))
}

pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_list_services).post(create_service))
        .route("/{id}", put(update_service).delete(delete_service))
}

#[utoipa::path(
    get,
    path = "/api/services",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List services", body = ApiResponse<ServiceList>),
    ),
    tag = "Services"
)]
pub async fn list_services(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ServiceList>>> {
    let resp = service_item_service::list_services(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/services",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List services", body = ApiResponse<ServiceList>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Services"
)]
pub async fn admin_list_services(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ServiceList>>> {
    let resp = service_item_service::list_services(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/services",
    request_body = CreateServiceRequest,
    responses(
        (status = 200, description = "Service created", body = ApiResponse<ServiceItem>),
        (status = 409, description = "Duplicate name"),
    ),
    tag = "Services"
)]
pub async fn create_service(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(payload): Json<CreateServiceRequest>,
) -> AppResult<Json<ApiResponse<ServiceItem>>> {
    let service = service_item_service::create_service(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Service created",
        service,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/services/{id}",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Service updated", body = ApiResponse<ServiceItem>),
        (status = 404, description = "Not found"),
    ),
    tag = "Services"
)]
pub async fn update_service(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceRequest>,
) -> AppResult<Json<ApiResponse<ServiceItem>>> {
    let service = service_item_service::update_service(&state, id, payload).await?;
    Ok(Json(ApiResponse::success(
        "Service updated",
        service,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/services/{id}",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service deleted"),
        (status = 404, description = "Not found"),
    ),
    tag = "Services"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    service_item_service::delete_service(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
