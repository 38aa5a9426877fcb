use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};

use crate::{
    dto::orders::{
        CreateOrderRequest, OrderList, OrderSummaryList, PaymentUpdateRequest, UpdateOrderRequest,
    },
    dto::products::ProductList,
    error::AppResult,
    middleware::auth::{AdminSession, CustomerSession, Session},
    models::Order,
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, Pagination},
    services::{order_service, product_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/my-orders", get(list_my_orders))
        .route("/delivery/today", get(list_delivery_today))
        .route("/pending-payments", get(list_pending_payments))
        .route("/available-products", get(list_available_products))
        .route("/customer/{customer_id}", get(list_customer_orders))
        .route(
            "/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/{id}/payment", patch(update_payment))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("status" = Option<String>, Query, description = "Filter by order status"),
    ),
    responses(
        (status = 200, description = "Order summaries", body = ApiResponse<OrderSummaryList>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderSummaryList>>> {
    let resp = order_service::list_summaries(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = ApiResponse<Order>),
        (status = 400, description = "No items or bad quantity"),
        (status = 404, description = "Customer or product not found"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = order_service::create_order(&state, payload).await?;
    Ok(Json(ApiResponse::success("Order created", order, None)))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with items", body = ApiResponse<Order>),
        (status = 404, description = "Not found or not owned by the caller"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = order_service::get_order(&state, &session, id).await?;
    Ok(Json(ApiResponse::success("Order", order, None)))
}

#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<Order>),
        (status = 404, description = "Not found"),
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = order_service::update_order(&state, id, payload).await?;
    Ok(Json(ApiResponse::success("Order updated", order, None)))
}

#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/payment",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = PaymentUpdateRequest,
    responses(
        (status = 200, description = "Payment status updated", body = ApiResponse<Order>),
        (status = 404, description = "Not found"),
    ),
    tag = "Orders"
)]
pub async fn update_payment(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
    Json(payload): Json<PaymentUpdateRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = order_service::update_payment(&state, id, payload).await?;
    Ok(Json(ApiResponse::success("Payment updated", order, None)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/orders/{id}",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 404, description = "Not found"),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    order_service::delete_order(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/customer/{customer_id}",
    params(
        ("customer_id" = i32, Path, description = "Customer ID"),
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "Orders for a customer", body = ApiResponse<OrderList>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Orders"
)]
pub async fn list_customer_orders(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(customer_id): Path<i32>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_customer_orders(&state, customer_id, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/my-orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "Own orders", body = ApiResponse<OrderList>),
        (status = 401, description = "No customer session"),
    ),
    tag = "Orders"
)]
pub async fn list_my_orders(
    State(state): State<AppState>,
    session: CustomerSession,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_customer_orders(&state, session.customer_id, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/delivery/today",
    responses(
        (status = 200, description = "Orders due for delivery today", body = ApiResponse<OrderList>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Orders"
)]
pub async fn list_delivery_today(
    State(state): State<AppState>,
    _session: AdminSession,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_delivery_today(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/pending-payments",
    responses(
        (status = 200, description = "Orders with an unverified payment", body = ApiResponse<OrderList>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Orders"
)]
pub async fn list_pending_payments(
    State(state): State<AppState>,
    _session: AdminSession,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_pending_payments(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/available-products",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "Products in stock or on preorder", body = ApiResponse<ProductList>),
        (status = 401, description = "No session"),
    ),
    tag = "Orders"
)]
pub async fn list_available_products(
    State(state): State<AppState>,
    _session: Session,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_available_products(&state, pagination).await?;
    Ok(Json(resp))
}
