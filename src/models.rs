use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{Availability, BookingStatus, OrderStatus, PaymentStatus};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Admin {
    pub id: i32,
    pub nic: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductCategory {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryRef {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub availability: Availability,
    pub category: Option<CategoryRef>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: i32,
    pub customer_id: i32,
    pub service_id: i32,
    pub service_name: String,
    pub customer_name: String,
    pub description: Option<String>,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderItemView {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price_each: Decimal,
    pub line_total: Decimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderCustomerInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i32,
    pub order_date: DateTime<Utc>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub total_price: Option<Decimal>,
    pub advance_payment: Option<Decimal>,
    pub advance_payment_status: PaymentStatus,
    pub balance_payment: Option<Decimal>,
    pub balance_payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub customer: Option<OrderCustomerInfo>,
    pub order_items: Vec<OrderItemView>,
    pub created_at: DateTime<Utc>,
}

/// Compact order row for admin lists; no line items.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderSummary {
    pub id: i32,
    pub order_date: DateTime<Utc>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub total_price: Option<Decimal>,
    pub advance_payment_status: PaymentStatus,
    pub balance_payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub customer_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Paid/pending totals across a customer's orders. An amount counts as
/// paid only once its payment status is `verified`; an order counts as
/// paid only when both halves are verified.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentSummary {
    pub total_paid: Decimal,
    pub total_pending: Decimal,
    pub total_advance: Decimal,
    pub total_balance: Decimal,
    pub total_orders: i64,
    pub paid_orders: i64,
    pub pending_orders: i64,
}
