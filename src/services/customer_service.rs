use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::auth::{CustomerLoginRequest, CustomerRegisterRequest},
    dto::customers::{
        CreateCustomerRequest, CustomerList, CustomerProfile, UpdateCustomerRequest,
    },
    entity::{
        Bookings, Customers, Orders,
        customers::{ActiveModel, Column, Model as CustomerModel},
        orders::{Column as OrderCol, Model as OrderModel},
    },
    error::{AppError, AppResult},
    middleware::auth::{hash_password, verify_password},
    models::{Customer, PaymentSummary},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::{booking_service, order_service},
    state::AppState,
};

pub async fn register(
    state: &AppState,
    payload: CustomerRegisterRequest,
) -> AppResult<CustomerModel> {
    let email = payload.email.trim().to_string();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("A valid email is required".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }

    let exists = Customers::find()
        .filter(email_matches(&email))
        .one(&state.orm)
        .await?
        .is_some();
    if exists {
        return Err(AppError::EmailAlreadyUsed);
    }

    let customer = ActiveModel {
        id: NotSet,
        name: Set(payload.name.trim().to_string()),
        email: Set(email),
        phone: Set(payload.phone),
        password_hash: Set(hash_password(&payload.password)?),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(customer_id = customer.id, "customer registered");
    Ok(customer)
}

pub async fn login(state: &AppState, payload: CustomerLoginRequest) -> AppResult<CustomerModel> {
    let customer = Customers::find()
        .filter(email_matches(payload.email.trim()))
        .one(&state.orm)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&payload.password, &customer.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    Ok(customer)
}

pub async fn get_profile(state: &AppState, customer_id: i32) -> AppResult<CustomerProfile> {
    let customer = Customers::find_by_id(customer_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Customer not found with ID: {customer_id}"))
        })?;

    let order_models = Orders::find()
        .filter(OrderCol::CustomerId.eq(customer_id))
        .order_by_desc(OrderCol::CreatedAt)
        .all(&state.orm)
        .await?;

    let payments = payment_summary(&order_models);

    let mut orders = Vec::with_capacity(order_models.len());
    for order in order_models {
        orders.push(order_service::order_view(state, order, Some(&customer)).await?);
    }

    let bookings = booking_service::bookings_for_customer(state, customer_id).await?;

    Ok(CustomerProfile {
        customer: customer_from_entity(customer),
        orders,
        bookings,
        payments,
    })
}

/// Single pass over the orders, splitting advance/balance amounts into
/// paid (verified) and pending buckets.
pub fn payment_summary(orders: &[OrderModel]) -> PaymentSummary {
    use crate::entity::PaymentStatus;

    let mut total_paid = Decimal::ZERO;
    let mut total_pending = Decimal::ZERO;
    let mut total_advance = Decimal::ZERO;
    let mut total_balance = Decimal::ZERO;
    let mut paid_orders = 0i64;
    let mut pending_orders = 0i64;

    for order in orders {
        if let Some(advance) = order.advance_payment {
            total_advance += advance;
            if order.advance_payment_status == PaymentStatus::Verified {
                total_paid += advance;
            } else {
                total_pending += advance;
            }
        }
        if let Some(balance) = order.balance_payment {
            total_balance += balance;
            if order.balance_payment_status == PaymentStatus::Verified {
                total_paid += balance;
            } else {
                total_pending += balance;
            }
        }

        let fully_paid = order.advance_payment_status == PaymentStatus::Verified
            && order.balance_payment_status == PaymentStatus::Verified;
        if fully_paid {
            paid_orders += 1;
        } else {
            pending_orders += 1;
        }
    }

    PaymentSummary {
        total_paid,
        total_pending,
        total_advance,
        total_balance,
        total_orders: orders.len() as i64,
        paid_orders,
        pending_orders,
    }
}

pub async fn list_customers(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<CustomerList>> {
    let (page, limit, offset) = pagination.normalize();

    let finder = Customers::find().order_by_asc(Column::Id);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(customer_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Customers",
        CustomerList { items },
        Some(meta),
    ))
}

pub async fn create_customer(
    state: &AppState,
    payload: CreateCustomerRequest,
) -> AppResult<Customer> {
    let email = payload.email.trim().to_string();
    let exists = Customers::find()
        .filter(email_matches(&email))
        .one(&state.orm)
        .await?
        .is_some();
    if exists {
        return Err(AppError::EmailAlreadyUsed);
    }

    // Accounts created without a password cannot log in until one is set.
    let password_hash = match payload.password.as_deref().filter(|p| !p.is_empty()) {
        Some(password) => hash_password(password)?,
        None => format!("!disabled:{}", Utc::now().timestamp()),
    };

    let customer = ActiveModel {
        id: NotSet,
        name: Set(payload.name.trim().to_string()),
        email: Set(email),
        phone: Set(payload.phone),
        password_hash: Set(password_hash),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(customer_from_entity(customer))
}

pub async fn update_customer(
    state: &AppState,
    id: i32,
    payload: UpdateCustomerRequest,
) -> AppResult<Customer> {
    let existing = Customers::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer not found with ID: {id}")))?;

    if let Some(email) = payload.email.as_deref() {
        let email = email.trim();
        if !email.eq_ignore_ascii_case(&existing.email) {
            let taken = Customers::find()
                .filter(email_matches(email))
                .filter(Column::Id.ne(id))
                .one(&state.orm)
                .await?
                .is_some();
            if taken {
                return Err(AppError::EmailAlreadyUsed);
            }
        }
    }

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(email) = payload.email {
        active.email = Set(email.trim().to_string());
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(Some(phone));
    }

    let customer = active.update(&state.orm).await?;
    Ok(customer_from_entity(customer))
}

pub async fn delete_customer(state: &AppState, id: i32) -> AppResult<()> {
    let customer = Customers::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer not found with ID: {id}")))?;

    // Dependent rows go first; the schema has no cascade from customers.
    let order_ids: Vec<i32> = Orders::find()
        .filter(OrderCol::CustomerId.eq(id))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|o| o.id)
        .collect();
    for order_id in order_ids {
        order_service::delete_order(state, order_id).await?;
    }
    Bookings::delete_many()
        .filter(crate::entity::bookings::Column::CustomerId.eq(id))
        .exec(&state.orm)
        .await?;

    Customers::delete_by_id(customer.id).exec(&state.orm).await?;
    Ok(())
}

fn email_matches(email: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col(Column::Email))).eq(email.to_lowercase())
}

pub fn customer_from_entity(model: CustomerModel) -> Customer {
    Customer {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
