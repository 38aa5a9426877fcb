use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{
            AdminCreateRequest, AdminLoginRequest, AdminLoginResponse, CustomerLoginRequest,
            CustomerLoginResponse, CustomerRegisterRequest, RegistrationResponse,
        },
        bookings::{BookingList, CreateBookingRequest, UpdateBookingRequest},
        categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
        customers::{CreateCustomerRequest, CustomerList, CustomerProfile, UpdateCustomerRequest},
        orders::{
            CreateOrderRequest, OrderItemCreate, OrderList, OrderSummaryList,
            PaymentUpdateRequest, UpdateOrderRequest,
        },
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
        services::{CreateServiceRequest, ServiceList, UpdateServiceRequest},
        suppliers::{CreateSupplierRequest, SupplierList, UpdateSupplierRequest},
    },
    middleware::auth::SESSION_COOKIE,
    models::{
        Admin, Booking, Customer, Order, OrderSummary, PaymentSummary, Product, ProductCategory,
        ServiceItem, Supplier,
    },
    response::{ApiResponse, Meta},
    routes::{
        admins, bookings, categories, customers, health, orders, params, products, services,
        suppliers,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        customers::register,
        customers::login,
        customers::logout,
        customers::me,
        customers::profile,
        customers::list_customers,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        admins::login,
        admins::logout,
        admins::me,
        admins::create_admin,
        admins::list_admins,
        categories::list_categories,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        products::list_products,
        products::create_product,
        products::update_product,
        products::delete_product,
        services::list_services,
        services::admin_list_services,
        services::create_service,
        services::update_service,
        services::delete_service,
        suppliers::list_suppliers,
        suppliers::get_supplier,
        suppliers::create_supplier,
        suppliers::update_supplier,
        suppliers::delete_supplier,
        bookings::create_booking,
        bookings::list_bookings,
        bookings::list_my_bookings,
        bookings::get_booking,
        bookings::update_booking,
        bookings::delete_booking,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order,
        orders::update_payment,
        orders::delete_order,
        orders::list_customer_orders,
        orders::list_my_orders,
        orders::list_delivery_today,
        orders::list_pending_payments,
        orders::list_available_products
    ),
    components(
        schemas(
            Customer,
            Admin,
            ProductCategory,
            Product,
            ServiceItem,
            Supplier,
            Booking,
            Order,
            OrderSummary,
            PaymentSummary,
            CustomerRegisterRequest,
            CustomerLoginRequest,
            CustomerLoginResponse,
            RegistrationResponse,
            AdminLoginRequest,
            AdminLoginResponse,
            AdminCreateRequest,
            CreateCustomerRequest,
            UpdateCustomerRequest,
            CustomerList,
            CustomerProfile,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CategoryList,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            CreateServiceRequest,
            UpdateServiceRequest,
            ServiceList,
            CreateSupplierRequest,
            UpdateSupplierRequest,
            SupplierList,
            CreateBookingRequest,
            UpdateBookingRequest,
            BookingList,
            CreateOrderRequest,
            UpdateOrderRequest,
            OrderItemCreate,
            PaymentUpdateRequest,
            OrderList,
            OrderSummaryList,
            params::Pagination,
            params::OrderListQuery,
            Meta,
            ApiResponse<Customer>,
            ApiResponse<CustomerProfile>,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<BookingList>
        )
    ),
    security(
        ("session_cookie" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Customers", description = "Customer auth and profile"),
        (name = "Admins", description = "Admin auth and management"),
        (name = "Admin customers", description = "Customer records (admin)"),
        (name = "Categories", description = "Product category endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Services", description = "Studio service endpoints"),
        (name = "Suppliers", description = "Supplier endpoints"),
        (name = "Bookings", description = "Booking endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
