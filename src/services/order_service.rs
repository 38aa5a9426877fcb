use chrono::{Duration, NaiveTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::orders::{
        CreateOrderRequest, OrderItemCreate, OrderList, OrderSummaryList, PaymentType,
        PaymentUpdateRequest, UpdateOrderRequest,
    },
    entity::{
        Customers, OrderItems, Orders, PaymentStatus, Products,
        customers::Model as CustomerModel,
        order_items::{ActiveModel as OrderItemActive, Column as OrderItemCol},
        orders::{ActiveModel as OrderActive, Column as OrderCol, Model as OrderModel, OrderStatus},
    },
    error::{AppError, AppResult},
    middleware::auth::Session,
    models::{Order, OrderCustomerInfo, OrderItemView, OrderSummary},
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, Pagination},
    state::AppState,
};

pub async fn list_summaries(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderSummaryList>> {
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(status) = query.status {
        condition = condition.add(OrderCol::OrderStatus.eq(status));
    }

    let finder = Orders::find()
        .filter(condition)
        .order_by_desc(OrderCol::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(summary_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Orders",
        OrderSummaryList { items },
        Some(meta),
    ))
}

/// Admins can read any order; a customer session only its own.
pub async fn get_order(state: &AppState, session: &Session, id: i32) -> AppResult<Order> {
    let order = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order not found with ID: {id}")))?;

    if let Session::Customer(customer) = session {
        if order.customer_id != customer.customer_id {
            return Err(AppError::NotFound(format!("Order not found with ID: {id}")));
        }
    }

    order_view(state, order, None).await
}

pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Order> {
    let customer = Customers::find_by_id(payload.customer_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Customer not found with ID: {}",
                payload.customer_id
            ))
        })?;

    if payload.order_items.is_empty() {
        return Err(AppError::Validation(
            "Order must contain at least one item".into(),
        ));
    }

    let txn = state.orm.begin().await?;

    let order = OrderActive {
        id: NotSet,
        customer_id: Set(customer.id),
        order_date: Set(payload.order_date.unwrap_or_else(Utc::now).into()),
        delivery_date: Set(payload.delivery_date.map(Into::into)),
        total_price: Set(payload.total_price),
        advance_payment: Set(payload.advance_payment),
        advance_payment_status: Set(payload
            .advance_payment_status
            .unwrap_or(PaymentStatus::Unpaid)),
        balance_payment: Set(payload.balance_payment),
        balance_payment_status: Set(payload
            .balance_payment_status
            .unwrap_or(PaymentStatus::Unpaid)),
        order_status: Set(payload.order_status.unwrap_or(OrderStatus::Pending)),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    insert_items(&txn, order.id, &payload.order_items).await?;

    txn.commit().await?;

    tracing::info!(order_id = order.id, customer_id = customer.id, "order created");
    order_view(state, order, Some(&customer)).await
}

pub async fn update_order(
    state: &AppState,
    id: i32,
    payload: UpdateOrderRequest,
) -> AppResult<Order> {
    let existing = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order not found with ID: {id}")))?;

    let txn = state.orm.begin().await?;

    let mut active: OrderActive = existing.into();
    if let Some(order_date) = payload.order_date {
        active.order_date = Set(order_date.into());
    }
    if let Some(delivery_date) = payload.delivery_date {
        active.delivery_date = Set(Some(delivery_date.into()));
    }
    if let Some(total_price) = payload.total_price {
        active.total_price = Set(Some(total_price));
    }
    if let Some(advance_payment) = payload.advance_payment {
        active.advance_payment = Set(Some(advance_payment));
    }
    if let Some(status) = payload.advance_payment_status {
        active.advance_payment_status = Set(status);
    }
    if let Some(balance_payment) = payload.balance_payment {
        active.balance_payment = Set(Some(balance_payment));
    }
    if let Some(status) = payload.balance_payment_status {
        active.balance_payment_status = Set(status);
    }
    if let Some(status) = payload.order_status {
        active.order_status = Set(status);
    }

    let order = active.update(&txn).await?;

    if let Some(items) = payload.order_items.as_deref() {
        OrderItems::delete_many()
            .filter(OrderItemCol::OrderId.eq(order.id))
            .exec(&txn)
            .await?;
        insert_items(&txn, order.id, items).await?;
    }

    txn.commit().await?;

    order_view(state, order, None).await
}

pub async fn update_payment(
    state: &AppState,
    id: i32,
    payload: PaymentUpdateRequest,
) -> AppResult<Order> {
    let existing = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order not found with ID: {id}")))?;

    let mut active: OrderActive = existing.into();
    match payload.payment_type {
        PaymentType::Advance => {
            active.advance_payment_status = Set(payload.payment_status);
            if let Some(amount) = payload.amount {
                active.advance_payment = Set(Some(amount));
            }
        }
        PaymentType::Balance => {
            active.balance_payment_status = Set(payload.payment_status);
            if let Some(amount) = payload.amount {
                active.balance_payment = Set(Some(amount));
            }
        }
    }

    let order = active.update(&state.orm).await?;
    tracing::info!(order_id = order.id, "payment status updated");
    order_view(state, order, None).await
}

pub async fn delete_order(state: &AppState, id: i32) -> AppResult<()> {
    let order = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order not found with ID: {id}")))?;

    let txn = state.orm.begin().await?;
    OrderItems::delete_many()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .exec(&txn)
        .await?;
    Orders::delete_by_id(order.id).exec(&txn).await?;
    txn.commit().await?;

    Ok(())
}

pub async fn list_customer_orders(
    state: &AppState,
    customer_id: i32,
    pagination: Pagination,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = pagination.normalize();

    let finder = Orders::find()
        .filter(OrderCol::CustomerId.eq(customer_id))
        .order_by_desc(OrderCol::CreatedAt);
    let total = finder.clone().count(&state.orm).await? as i64;

    let orders = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;

    let mut items = Vec::with_capacity(orders.len());
    for order in orders {
        items.push(order_view(state, order, None).await?);
    }

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

/// Orders whose delivery date falls on the current UTC day.
pub async fn list_delivery_today(state: &AppState) -> AppResult<ApiResponse<OrderList>> {
    let start = Utc::now()
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc();
    let end = start + Duration::days(1);

    let orders = Orders::find()
        .filter(OrderCol::DeliveryDate.gte(start))
        .filter(OrderCol::DeliveryDate.lt(end))
        .order_by_asc(OrderCol::DeliveryDate)
        .all(&state.orm)
        .await?;

    let mut items = Vec::with_capacity(orders.len());
    for order in orders {
        items.push(order_view(state, order, None).await?);
    }

    Ok(ApiResponse::success(
        "Deliveries today",
        OrderList { items },
        Some(Meta::empty()),
    ))
}

/// Orders where either payment half has not been verified yet.
pub async fn list_pending_payments(state: &AppState) -> AppResult<ApiResponse<OrderList>> {
    let condition = Condition::any()
        .add(OrderCol::AdvancePaymentStatus.ne(PaymentStatus::Verified))
        .add(OrderCol::BalancePaymentStatus.ne(PaymentStatus::Verified));

    let orders = Orders::find()
        .filter(condition)
        .order_by_desc(OrderCol::CreatedAt)
        .all(&state.orm)
        .await?;

    let mut items = Vec::with_capacity(orders.len());
    for order in orders {
        items.push(order_view(state, order, None).await?);
    }

    Ok(ApiResponse::success(
        "Pending payments",
        OrderList { items },
        Some(Meta::empty()),
    ))
}

async fn insert_items<C: ConnectionTrait>(
    conn: &C,
    order_id: i32,
    items: &[OrderItemCreate],
) -> AppResult<()> {
    for item in items {
        if item.quantity < 1 {
            return Err(AppError::Validation("Quantity must be at least 1".into()));
        }
        let product = Products::find_by_id(item.product_id)
            .one(conn)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Product not found: {}", item.product_id))
            })?;

        OrderItemActive {
            order_id: Set(order_id),
            product_id: Set(product.id),
            quantity: Set(item.quantity),
            price_each: Set(item.price_each),
        }
        .insert(conn)
        .await?;
    }
    Ok(())
}

/// Build the full order view: customer info plus line items with their
/// product names and derived line totals.
pub async fn order_view(
    state: &AppState,
    order: OrderModel,
    customer: Option<&CustomerModel>,
) -> AppResult<Order> {
    let customer_info = match customer {
        Some(c) => Some(customer_info(c)),
        None => Customers::find_by_id(order.customer_id)
            .one(&state.orm)
            .await?
            .as_ref()
            .map(customer_info),
    };

    let rows = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .find_also_related(Products)
        .all(&state.orm)
        .await?;

    let order_items = rows
        .into_iter()
        .map(|(item, product)| OrderItemView {
            product_id: item.product_id,
            product_name: product
                .map(|p| p.name)
                .unwrap_or_else(|| "Unknown Product".to_string()),
            quantity: item.quantity,
            price_each: item.price_each,
            line_total: item.price_each * rust_decimal::Decimal::from(item.quantity),
        })
        .collect();

    Ok(Order {
        id: order.id,
        order_date: order.order_date.with_timezone(&Utc),
        delivery_date: order.delivery_date.map(|d| d.with_timezone(&Utc)),
        total_price: order.total_price,
        advance_payment: order.advance_payment,
        advance_payment_status: order.advance_payment_status,
        balance_payment: order.balance_payment,
        balance_payment_status: order.balance_payment_status,
        order_status: order.order_status,
        customer: customer_info,
        order_items,
        created_at: order.created_at.with_timezone(&Utc),
    })
}

fn customer_info(model: &CustomerModel) -> OrderCustomerInfo {
    OrderCustomerInfo {
        id: model.id,
        name: model.name.clone(),
        email: model.email.clone(),
        phone: model.phone.clone(),
    }
}

fn summary_from_entity(model: OrderModel) -> OrderSummary {
    OrderSummary {
        id: model.id,
        order_date: model.order_date.with_timezone(&Utc),
        delivery_date: model.delivery_date.map(|d| d.with_timezone(&Utc)),
        total_price: model.total_price,
        advance_payment_status: model.advance_payment_status,
        balance_payment_status: model.balance_payment_status,
        order_status: model.order_status,
        customer_id: model.customer_id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
