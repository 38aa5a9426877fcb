use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    dto::auth::{AdminCreateRequest, AdminLoginRequest, AdminLoginResponse},
    error::AppResult,
    middleware::auth::{
        AdminSession, KIND_ADMIN, expired_session_cookie, issue_session, session_cookie,
    },
    models::Admin,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::admin_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
        .route("/", get(list_admins).post(create_admin))
}

#[utoipa::path(
    post,
    path = "/api/admins/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = ApiResponse<AdminLoginResponse>),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "Admins"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<AdminLoginRequest>,
) -> AppResult<(CookieJar, Json<ApiResponse<AdminLoginResponse>>)> {
    let admin = admin_service::validate_login(&state, payload).await?;

    let token = issue_session(admin.id, KIND_ADMIN, &admin.name, &admin.nic)?;
    let jar = jar.add(session_cookie(token));

    let data = AdminLoginResponse {
        status: "ok".into(),
        admin_id: admin.id,
        admin_nic: admin.nic,
        admin_name: admin.name,
    };
    Ok((jar, Json(ApiResponse::success("Logged in", data, None))))
}

#[utoipa::path(
    post,
    path = "/api/admins/logout",
    responses((status = 204, description = "Session cleared")),
    tag = "Admins"
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(expired_session_cookie());
    (jar, StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admins/me",
    responses(
        (status = 200, description = "Current admin session", body = ApiResponse<AdminLoginResponse>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Admins"
)]
pub async fn me(session: AdminSession) -> Json<ApiResponse<AdminLoginResponse>> {
    let data = AdminLoginResponse {
        status: "ok".into(),
        admin_id: session.admin_id,
        admin_nic: session.nic,
        admin_name: session.name,
    };
    Json(ApiResponse::success("Me", data, None))
}

#[utoipa::path(
    post,
    path = "/api/admins",
    request_body = AdminCreateRequest,
    responses(
        (status = 200, description = "Admin created", body = ApiResponse<Admin>),
        (status = 409, description = "NIC already exists"),
    ),
    tag = "Admins"
)]
pub async fn create_admin(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(payload): Json<AdminCreateRequest>,
) -> AppResult<Json<ApiResponse<Admin>>> {
    let admin = admin_service::create_admin(&state, payload).await?;
    Ok(Json(ApiResponse::success(
        "Admin created",
        admin,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/admins",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List admins", body = ApiResponse<Vec<Admin>>),
        (status = 401, description = "No admin session"),
    ),
    tag = "Admins"
)]
pub async fn list_admins(
    State(state): State<AppState>,
    _session: AdminSession,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<Admin>>>> {
    let resp = admin_service::list_admins(&state, pagination).await?;
    Ok(Json(resp))
}
