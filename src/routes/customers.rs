use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    dto::auth::{
        CustomerLoginRequest, CustomerLoginResponse, CustomerRegisterRequest,
        RegistrationResponse,
    },
    dto::customers::{
        CreateCustomerRequest, CustomerList, CustomerProfile, UpdateCustomerRequest,
    },
    error::AppResult,
    middleware::auth::{
        AdminSession, CustomerSession, KIND_CUSTOMER, expired_session_cookie, issue_session,
        session_cookie,
    },
    models::Customer,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::customer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .route("/profile", get(profile))
}

pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/{id}", put(update_customer).delete(delete_customer))
}

#[utoipa::path(
    post,
    path = "/api/customers/register",
    request_body = CustomerRegisterRequest,
    responses(
        (status = 200, description = "Customer registered", body = ApiResponse<RegistrationResponse>),
        (status = 409, description = "Email already used"),
    ),
    tag = "Customers"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CustomerRegisterRequest>,
) -> AppResult<Json<ApiResponse<RegistrationResponse>>> {
    let customer = customer_service::register(&state, payload).await?;
    let data = RegistrationResponse {
        status: "ok".into(),
        customer_id: customer.id,
    };
    Ok(Json(ApiResponse::success("Registered", data, None)))
}

#[utoipa::path(
    post,
    path = "/api/customers/login",
    request_body = CustomerLoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = ApiResponse<CustomerLoginResponse>),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "Customers"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CustomerLoginRequest>,
) -> AppResult<(CookieJar, Json<ApiResponse<CustomerLoginResponse>>)> {
    let customer = customer_service::login(&state, payload).await?;

    let token = issue_session(customer.id, KIND_CUSTOMER, &customer.name, &customer.email)?;
    let jar = jar.add(session_cookie(token));

    let data = CustomerLoginResponse {
        status: "ok".into(),
        customer_id: customer.id,
        name: customer.name,
        email: customer.email,
    };
    Ok((jar, Json(ApiResponse::success("Logged in", data, None))))
}

#[utoipa::path(
    post,
    path = "/api/customers/logout",
    responses((status = 204, description = "Session cleared")),
    tag = "Customers"
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(expired_session_cookie());
    (jar, StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/customers/me",
    responses(
        (status = 200, description = "Current customer session", body = ApiResponse<CustomerLoginResponse>),
        (status = 401, description = "No customer session"),
    ),
    tag = "Customers"
)]
pub async fn me(session: CustomerSession) -> Json<ApiResponse<CustomerLoginResponse>> {
    let data = CustomerLoginResponse {
        status: "ok".into(),
        customer_id: session.customer_id,
        name: session.name,
        email: session.email,
    };
    Json(ApiResponse::success("Me", data, None))
}

#[utoipa::path(
    get,
    path = "/api/customers/profile",
    responses(
        (status = 200, description = "Profile with orders, bookings and payment summary", body = ApiResponse<CustomerProfile>),
        (status = 401, description = "No customer session"),
    ),
    tag = "Customers"
)]
pub async fn profile(
    State(state): State<AppState>,
    session: CustomerSession,
) -> AppResult<Json<ApiResponse<CustomerProfile>>> {
    let profile = customer_service::get_profile(&state, session.customer_id).await?;
    Ok(Json(ApiResponse::success("Profile", profile, None)))
}

#[utoipa::path(
    get,
    path = "/api/admin/customers",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List customers (admin only)", body = ApiResponse<CustomerList>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Admin customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<CustomerList>>> {
    let resp = customer_service::list_customers(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Customer created", body = ApiResponse<Customer>),
        (status = 409, description = "Email already used"),
    ),
    tag = "Admin customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(payload): Json<CreateCustomerRequest>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    let customer = customer_service::create_customer(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Customer created",
        customer,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/customers/{id}",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<Customer>),
        (status = 404, description = "Not found"),
    ),
    tag = "Admin customers"
)]
pub async fn update_customer(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCustomerRequest>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    let customer = customer_service::update_customer(&state, id, payload).await?;
    Ok(Json(ApiResponse::success(
        "Customer updated",
        customer,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/customers/{id}",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 404, description = "Not found"),
    ),
    tag = "Admin customers"
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    customer_service::delete_customer(&state, id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
