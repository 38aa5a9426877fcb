use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::BookingStatus;
use crate::models::Booking;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    pub customer_name: String,
    pub service_id: i32,
    /// Must lie in the future at creation time.
    pub booking_date: DateTime<Utc>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingRequest {
    pub customer_name: Option<String>,
    pub service_id: Option<i32>,
    pub booking_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub status: Option<BookingStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingList {
    pub items: Vec<Booking>,
}
