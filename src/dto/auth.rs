use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Debug, ToSchema)]
pub struct CustomerRegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CustomerLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerLoginResponse {
    pub status: String,
    pub customer_id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct AdminLoginRequest {
    pub nic: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub status: String,
    pub admin_id: i32,
    pub admin_nic: String,
    pub admin_name: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct AdminCreateRequest {
    pub nic: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationResponse {
    pub status: String,
    pub customer_id: i32,
}

/// Session claims carried by the `studio_session` cookie. `kind`
/// distinguishes admin sessions from customer sessions; `label` holds
/// the NIC for admins and the email for customers.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionClaims {
    pub sub: String,
    pub kind: String,
    pub name: String,
    pub label: String,
    pub exp: usize,
}
