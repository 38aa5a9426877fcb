pub mod admins;
pub mod bookings;
pub mod customers;
pub mod order_items;
pub mod orders;
pub mod product_categories;
pub mod products;
pub mod services;
pub mod suppliers;

pub use admins::Entity as Admins;
pub use bookings::Entity as Bookings;
pub use customers::Entity as Customers;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use product_categories::Entity as ProductCategories;
pub use products::Entity as Products;
pub use services::Entity as Services;
pub use suppliers::Entity as Suppliers;

pub use bookings::BookingStatus;
pub use orders::{OrderStatus, PaymentStatus};
pub use products::Availability;
