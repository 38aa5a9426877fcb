use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Booking, Customer, Order, PaymentSummary};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Optional; when absent the account cannot log in until an admin
    /// sets a password.
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerList {
    pub items: Vec<Customer>,
}

/// Everything the customer dashboard needs in one payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerProfile {
    pub customer: Customer,
    pub orders: Vec<Order>,
    pub bookings: Vec<Booking>,
    pub payments: PaymentSummary,
}
