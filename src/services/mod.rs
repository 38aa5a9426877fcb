pub mod admin_service;
pub mod booking_service;
pub mod category_service;
pub mod customer_service;
pub mod order_service;
pub mod product_service;
pub mod service_item_service;
pub mod supplier_service;
