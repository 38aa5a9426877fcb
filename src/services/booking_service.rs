use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::bookings::{BookingList, CreateBookingRequest, UpdateBookingRequest},
    entity::{
        BookingStatus, Bookings, Customers, Services,
        bookings::{ActiveModel, Column, Model as BookingModel},
        services::Model as ServiceModel,
    },
    error::{AppError, AppResult},
    middleware::auth::Session,
    models::Booking,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn create_booking(
    state: &AppState,
    customer_id: i32,
    payload: CreateBookingRequest,
) -> AppResult<Booking> {
    let customer = Customers::find_by_id(customer_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Customer not found with ID: {customer_id}"))
        })?;

    let service = Services::find_by_id(payload.service_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Service not found with ID: {}", payload.service_id))
        })?;

    if payload.booking_date <= Utc::now() {
        return Err(AppError::Validation(
            "Booking date must be in the future".into(),
        ));
    }

    if payload.customer_name.trim().is_empty() {
        return Err(AppError::Validation("Customer name is required".into()));
    }

    let booking = ActiveModel {
        id: NotSet,
        customer_id: Set(customer.id),
        service_id: Set(service.id),
        customer_name: Set(payload.customer_name.trim().to_string()),
        description: Set(payload.description),
        status: Set(BookingStatus::Pending),
        booking_date: Set(payload.booking_date.into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(booking_id = booking.id, customer_id, "booking created");
    Ok(booking_from_entity(booking, Some(service)))
}

pub async fn list_all_bookings(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<BookingList>> {
    list_bookings(state, pagination, None).await
}

pub async fn list_customer_bookings(
    state: &AppState,
    customer_id: i32,
    pagination: Pagination,
) -> AppResult<ApiResponse<BookingList>> {
    list_bookings(state, pagination, Some(customer_id)).await
}

async fn list_bookings(
    state: &AppState,
    pagination: Pagination,
    customer_id: Option<i32>,
) -> AppResult<ApiResponse<BookingList>> {
    let (page, limit, offset) = pagination.normalize();

    let mut finder = Bookings::find().order_by_desc(Column::BookingDate);
    if let Some(customer_id) = customer_id {
        finder = finder.filter(Column::CustomerId.eq(customer_id));
    }

    let total = finder.clone().count(&state.orm).await? as i64;

    let rows = finder
        .find_also_related(Services)
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;

    let items = rows
        .into_iter()
        .map(|(booking, service)| booking_from_entity(booking, service))
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Bookings",
        BookingList { items },
        Some(meta),
    ))
}

/// Unpaginated variant used by the customer profile payload.
pub async fn bookings_for_customer(
    state: &AppState,
    customer_id: i32,
) -> AppResult<Vec<Booking>> {
    let rows = Bookings::find()
        .filter(Column::CustomerId.eq(customer_id))
        .order_by_desc(Column::BookingDate)
        .find_also_related(Services)
        .all(&state.orm)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(booking, service)| booking_from_entity(booking, service))
        .collect())
}

/// Admins can read any booking; a customer session only its own. A
/// foreign booking id looks the same as a missing one to the caller.
pub async fn get_booking(state: &AppState, session: &Session, id: i32) -> AppResult<Booking> {
    let row = Bookings::find_by_id(id)
        .find_also_related(Services)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking not found with ID: {id}")))?;

    let (booking, service) = row;
    if let Session::Customer(customer) = session {
        if booking.customer_id != customer.customer_id {
            return Err(AppError::NotFound(format!("Booking not found with ID: {id}")));
        }
    }

    Ok(booking_from_entity(booking, service))
}

pub async fn update_booking(
    state: &AppState,
    id: i32,
    payload: UpdateBookingRequest,
) -> AppResult<Booking> {
    let existing = Bookings::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking not found with ID: {id}")))?;

    let mut active: ActiveModel = existing.into();
    if let Some(customer_name) = payload.customer_name {
        active.customer_name = Set(customer_name.trim().to_string());
    }
    if let Some(booking_date) = payload.booking_date {
        active.booking_date = Set(booking_date.into());
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(status) = payload.status {
        active.status = Set(status);
    }
    if let Some(service_id) = payload.service_id {
        let service = Services::find_by_id(service_id)
            .one(&state.orm)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Service not found with ID: {service_id}"))
            })?;
        active.service_id = Set(service.id);
    }

    let booking = active.update(&state.orm).await?;
    let service = Services::find_by_id(booking.service_id)
        .one(&state.orm)
        .await?;
    Ok(booking_from_entity(booking, service))
}

pub async fn delete_booking(state: &AppState, id: i32) -> AppResult<()> {
    let result = Bookings::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Booking not found with ID: {id}")));
    }
    Ok(())
}

pub fn booking_from_entity(model: BookingModel, service: Option<ServiceModel>) -> Booking {
    Booking {
        id: model.id,
        customer_id: model.customer_id,
        service_id: model.service_id,
        service_name: service
            .map(|s| s.name)
            .unwrap_or_else(|| "Unknown Service".to_string()),
        customer_name: model.customer_name,
        description: model.description,
        status: model.status,
        booking_date: model.booking_date.with_timezone(&Utc),
        created_at: model.created_at.with_timezone(&Utc),
    }
}
