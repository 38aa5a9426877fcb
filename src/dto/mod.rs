pub mod auth;
pub mod bookings;
pub mod categories;
pub mod customers;
pub mod orders;
pub mod products;
pub mod services;
pub mod suppliers;
