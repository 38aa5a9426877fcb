use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, put},
};

use crate::{
    dto::bookings::{BookingList, CreateBookingRequest, UpdateBookingRequest},
    error::AppResult,
    middleware::auth::{AdminSession, CustomerSession, Session},
    models::Booking,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::booking_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/customer", get(list_my_bookings))
        .route(
            "/{id}",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created", body = ApiResponse<Booking>),
        (status = 400, description = "Booking date not in the future"),
        (status = 401, description = "No customer session"),
        (status = 404, description = "Service not found"),
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: CustomerSession,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let booking = booking_service::create_booking(&state, session.customer_id, payload).await?;
    Ok(Json(ApiResponse::success("Booking created", booking, None)))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "All bookings", body = ApiResponse<BookingList>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Bookings"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<BookingList>>> {
    let resp = booking_service::list_all_bookings(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/bookings/customer",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "Own bookings", body = ApiResponse<BookingList>),
        (status = 401, description = "No customer session"),
    ),
    tag = "Bookings"
)]
pub async fn list_my_bookings(
    State(state): State<AppState>,
    session: CustomerSession,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<BookingList>>> {
    let resp =
        booking_service::list_customer_bookings(&state, session.customer_id, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking", body = ApiResponse<Booking>),
        (status = 404, description = "Not found or not owned by the caller"),
    ),
    tag = "Bookings"
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let booking = booking_service::get_booking(&state, &session, id).await?;
    Ok(Json(ApiResponse::success("Booking", booking, None)))
}

#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingRequest,
    responses(
        (status = 200, description = "Booking updated", body = ApiResponse<Booking>),
        (status = 404, description = "Not found"),
    ),
    tag = "Bookings"
)]
pub async fn update_booking(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingRequest>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let booking = booking_service::update_booking(&state, id, payload).await?;
    Ok(Json(ApiResponse::success("Booking updated", booking, None)))
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted"),
        (status = 404, description = "Not found"),
    ),
    tag = "Bookings"
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    booking_service::delete_booking(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
