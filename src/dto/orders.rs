use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{OrderStatus, PaymentStatus};
use crate::models::{Order, OrderSummary};

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemCreate {
    pub product_id: i32,
    pub quantity: i32,
    pub price_each: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: i32,
    pub order_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub total_price: Option<Decimal>,
    pub advance_payment: Option<Decimal>,
    pub advance_payment_status: Option<PaymentStatus>,
    pub balance_payment: Option<Decimal>,
    pub balance_payment_status: Option<PaymentStatus>,
    pub order_status: Option<OrderStatus>,
    pub order_items: Vec<OrderItemCreate>,
}

/// Absent fields leave the stored value unchanged. When `order_items`
/// is present the existing line items are replaced wholesale.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub order_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub total_price: Option<Decimal>,
    pub advance_payment: Option<Decimal>,
    pub advance_payment_status: Option<PaymentStatus>,
    pub balance_payment: Option<Decimal>,
    pub balance_payment_status: Option<PaymentStatus>,
    pub order_status: Option<OrderStatus>,
    pub order_items: Option<Vec<OrderItemCreate>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Advance,
    Balance,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentUpdateRequest {
    pub payment_type: PaymentType,
    pub payment_status: PaymentStatus,
    pub amount: Option<Decimal>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderSummaryList {
    pub items: Vec<OrderSummary>,
}
