use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    dto::auth::SessionClaims,
    error::{AppError, AppResult},
};

pub const SESSION_COOKIE: &str = "studio_session";
pub const KIND_ADMIN: &str = "admin";
pub const KIND_CUSTOMER: &str = "customer";

const SESSION_HOURS: i64 = 24;

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match PasswordHash::new(password_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

fn session_secret() -> AppResult<String> {
    std::env::var("SESSION_SECRET")
        .map_err(|_| AppError::Internal(anyhow::anyhow!("SESSION_SECRET is not set")))
}

/// Sign the session attributes into the cookie token.
pub fn issue_session(id: i32, kind: &str, name: &str, label: &str) -> AppResult<String> {
    let secret = session_secret()?;
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(SESSION_HOURS))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = SessionClaims {
        sub: id.to_string(),
        kind: kind.to_string(),
        name: name.to_string(),
        label: label.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub fn session_cookie(token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

pub fn expired_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie
}

fn decode_session(jar: &CookieJar) -> AppResult<SessionClaims> {
    let cookie = jar.get(SESSION_COOKIE).ok_or(AppError::Unauthorized)?;

    let secret = session_secret()?;
    let decoded = decode::<SessionClaims>(
        cookie.value(),
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized)?;

    Ok(decoded.claims)
}

#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin_id: i32,
    pub nic: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CustomerSession {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
}

/// Either side of the session split, for endpoints open to both.
#[derive(Debug, Clone)]
pub enum Session {
    Admin(AdminSession),
    Customer(CustomerSession),
}

fn admin_from_claims(claims: &SessionClaims) -> AppResult<AdminSession> {
    let admin_id = claims
        .sub
        .parse::<i32>()
        .map_err(|_| AppError::Unauthorized)?;
    Ok(AdminSession {
        admin_id,
        nic: claims.label.clone(),
        name: claims.name.clone(),
    })
}

fn customer_from_claims(claims: &SessionClaims) -> AppResult<CustomerSession> {
    let customer_id = claims
        .sub
        .parse::<i32>()
        .map_err(|_| AppError::Unauthorized)?;
    Ok(CustomerSession {
        customer_id,
        name: claims.name.clone(),
        email: claims.label.clone(),
    })
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let claims = decode_session(&jar)?;
        if claims.kind != KIND_ADMIN {
            return Err(AppError::Unauthorized);
        }
        admin_from_claims(&claims)
    }
}

impl<S> FromRequestParts<S> for CustomerSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let claims = decode_session(&jar)?;
        if claims.kind != KIND_CUSTOMER {
            return Err(AppError::Unauthorized);
        }
        customer_from_claims(&claims)
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let claims = decode_session(&jar)?;
        match claims.kind.as_str() {
            KIND_ADMIN => Ok(Session::Admin(admin_from_claims(&claims)?)),
            KIND_CUSTOMER => Ok(Session::Customer(customer_from_claims(&claims)?)),
            _ => Err(AppError::Unauthorized),
        }
    }
}
