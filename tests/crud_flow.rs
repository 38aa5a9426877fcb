use axum_studio_api::{
    db::{create_orm_conn, run_migrations},
    dto::{
        auth::{CustomerLoginRequest, CustomerRegisterRequest},
        bookings::CreateBookingRequest,
        categories::CreateCategoryRequest,
        orders::{CreateOrderRequest, OrderItemCreate, PaymentType, PaymentUpdateRequest},
        products::{CreateProductRequest, UpdateProductRequest},
        services::CreateServiceRequest,
        suppliers::CreateSupplierRequest,
    },
    entity::{Availability, PaymentStatus},
    error::AppError,
    middleware::auth::{CustomerSession, Session},
    services::{
        booking_service, category_service, customer_service, order_service, product_service,
        service_item_service, supplier_service,
    },
    state::AppState,
};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, Statement};

// Integration flow: customer registers and logs in, books a service,
// an admin creates an order, verifies the advance payment, and the
// profile reflects it all.
#[tokio::test]
async fn register_book_order_and_profile_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    // Register a customer; a second registration with the same email must conflict.
    let customer = customer_service::register(
        &state,
        CustomerRegisterRequest {
            name: "Jamie Perera".into(),
            email: "jamie@example.com".into(),
            phone: Some("0771234567".into()),
            password: "secret123".into(),
        },
    )
    .await?;

    let duplicate = customer_service::register(
        &state,
        CustomerRegisterRequest {
            name: "Other".into(),
            email: "JAMIE@example.com".into(),
            phone: None,
            password: "whatever".into(),
        },
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::EmailAlreadyUsed)));

    // Wrong password is rejected, the right one is accepted.
    let bad_login = customer_service::login(
        &state,
        CustomerLoginRequest {
            email: "jamie@example.com".into(),
            password: "wrong".into(),
        },
    )
    .await;
    assert!(matches!(bad_login, Err(AppError::InvalidCredentials)));

    let logged_in = customer_service::login(
        &state,
        CustomerLoginRequest {
            email: "jamie@example.com".into(),
            password: "secret123".into(),
        },
    )
    .await?;
    assert_eq!(logged_in.id, customer.id);

    // Email casing is irrelevant at login, as at registration.
    let mixed_case = customer_service::login(
        &state,
        CustomerLoginRequest {
            email: "JAMIE@Example.com".into(),
            password: "secret123".into(),
        },
    )
    .await?;
    assert_eq!(mixed_case.id, customer.id);

    // Seed a service and book it; a past date must be rejected first.
    let service = service_item_service::create_service(
        &state,
        CreateServiceRequest {
            name: "Portrait Session".into(),
            description: Some("One hour in studio".into()),
            price: Decimal::new(7500, 2),
        },
    )
    .await?;

    let past = booking_service::create_booking(
        &state,
        customer.id,
        CreateBookingRequest {
            customer_name: "Jamie Perera".into(),
            service_id: service.id,
            booking_date: Utc::now() - Duration::days(1),
            description: None,
        },
    )
    .await;
    assert!(matches!(past, Err(AppError::Validation(_))));

    let booking = booking_service::create_booking(
        &state,
        customer.id,
        CreateBookingRequest {
            customer_name: "Jamie Perera".into(),
            service_id: service.id,
            booking_date: Utc::now() + Duration::days(7),
            description: Some("Outdoor look".into()),
        },
    )
    .await?;
    assert_eq!(booking.service_name, "Portrait Session");

    // Catalog for the order.
    let category = category_service::create_category(
        &state,
        CreateCategoryRequest {
            name: "Frames".into(),
            description: None,
        },
    )
    .await?;
    let shadow = category_service::create_category(
        &state,
        CreateCategoryRequest {
            name: "FRAMES".into(),
            description: None,
        },
    )
    .await;
    assert!(matches!(shadow, Err(AppError::DuplicateName(_))));

    let product = product_service::create_product(
        &state,
        CreateProductRequest {
            name: "Classic Wooden Frame".into(),
            description: None,
            price: Decimal::new(2500, 2),
            availability: None,
            category_id: Some(category.id),
        },
    )
    .await?;

    // A price-only update leaves every other field untouched.
    let repriced = product_service::update_product(
        &state,
        product.id,
        UpdateProductRequest {
            name: None,
            description: None,
            price: Some(Decimal::new(2750, 2)),
            availability: None,
            category_id: None,
        },
    )
    .await?;
    assert_eq!(repriced.price, Decimal::new(2750, 2));
    assert_eq!(repriced.name, "Classic Wooden Frame");
    assert!(matches!(repriced.availability, Availability::InStock));
    assert_eq!(
        repriced.category.as_ref().map(|c| c.id),
        Some(category.id)
    );

    // Supplier emails are unique; a reused one conflicts as such.
    supplier_service::create_supplier(
        &state,
        CreateSupplierRequest {
            name: "Lanka Frames Ltd".into(),
            phone: Some("0112345678".into()),
            email: Some("sales@lankaframes.example".into()),
            address: None,
        },
    )
    .await?;
    let reused_email = supplier_service::create_supplier(
        &state,
        CreateSupplierRequest {
            name: "Another Supplier".into(),
            phone: None,
            email: Some("SALES@lankaframes.example".into()),
            address: None,
        },
    )
    .await;
    assert!(matches!(reused_email, Err(AppError::EmailAlreadyUsed)));

    // Admin creates an order with two frames.
    let order = order_service::create_order(
        &state,
        CreateOrderRequest {
            customer_id: customer.id,
            order_date: None,
            delivery_date: None,
            total_price: Some(Decimal::new(5000, 2)),
            advance_payment: Some(Decimal::new(2000, 2)),
            advance_payment_status: None,
            balance_payment: Some(Decimal::new(3000, 2)),
            balance_payment_status: None,
            order_status: None,
            order_items: vec![OrderItemCreate {
                product_id: product.id,
                quantity: 2,
                price_each: Decimal::new(2500, 2),
            }],
        },
    )
    .await?;
    assert_eq!(order.advance_payment_status, PaymentStatus::Unpaid);
    assert_eq!(order.order_items.len(), 1);
    assert_eq!(order.order_items[0].line_total, Decimal::new(5000, 2));

    // An order without items is invalid.
    let empty = order_service::create_order(
        &state,
        CreateOrderRequest {
            customer_id: customer.id,
            order_date: None,
            delivery_date: None,
            total_price: None,
            advance_payment: None,
            advance_payment_status: None,
            balance_payment: None,
            balance_payment_status: None,
            order_status: None,
            order_items: vec![],
        },
    )
    .await;
    assert!(matches!(empty, Err(AppError::Validation(_))));

    // Verify the advance payment.
    let updated = order_service::update_payment(
        &state,
        order.id,
        PaymentUpdateRequest {
            payment_type: PaymentType::Advance,
            payment_status: PaymentStatus::Verified,
            amount: None,
        },
    )
    .await?;
    assert_eq!(updated.advance_payment_status, PaymentStatus::Verified);
    assert_eq!(updated.balance_payment_status, PaymentStatus::Unpaid);

    // Another customer's session sees neither the order nor the booking.
    let stranger = Session::Customer(CustomerSession {
        customer_id: customer.id + 1000,
        name: "Stranger".into(),
        email: "stranger@example.com".into(),
    });
    let foreign_order = order_service::get_order(&state, &stranger, order.id).await;
    assert!(matches!(foreign_order, Err(AppError::NotFound(_))));
    let foreign_booking = booking_service::get_booking(&state, &stranger, booking.id).await;
    assert!(matches!(foreign_booking, Err(AppError::NotFound(_))));

    // The owner does see them.
    let owner = Session::Customer(CustomerSession {
        customer_id: customer.id,
        name: customer.name.clone(),
        email: customer.email.clone(),
    });
    let own_order = order_service::get_order(&state, &owner, order.id).await?;
    assert_eq!(own_order.id, order.id);

    // Profile rolls orders, bookings and the payment summary together.
    let profile = customer_service::get_profile(&state, customer.id).await?;
    assert_eq!(profile.orders.len(), 1);
    assert_eq!(profile.bookings.len(), 1);
    assert_eq!(profile.payments.total_paid, Decimal::new(2000, 2));
    assert_eq!(profile.payments.total_pending, Decimal::new(3000, 2));
    assert_eq!(profile.payments.paid_orders, 0);
    assert_eq!(profile.payments.pending_orders, 1);

    // Deleting the order removes its items; a second delete is a 404.
    order_service::delete_order(&state, order.id).await?;
    let gone = order_service::delete_order(&state, order.id).await;
    assert!(matches!(gone, Err(AppError::NotFound(_))));

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE order_items, orders, bookings, products, product_categories, services, suppliers, customers, admins RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { orm })
}
