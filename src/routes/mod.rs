use axum::Router;

use crate::state::AppState;

pub mod admins;
pub mod bookings;
pub mod categories;
pub mod customers;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;
pub mod services;
pub mod suppliers;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/customers", customers::router())
        .nest("/admins", admins::router())
        .nest("/services", services::router())
        .nest("/bookings", bookings::router())
        .nest("/admin/customers", customers::admin_router())
        .nest("/admin/categories", categories::router())
        .nest("/admin/products", products::router())
        .nest("/admin/services", services::admin_router())
        .nest("/admin/suppliers", suppliers::router())
        .nest("/admin/orders", orders::router())
}
