use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::auth::{AdminCreateRequest, AdminLoginRequest},
    entity::{
        Admins,
        admins::{ActiveModel, Column, Model as AdminModel},
    },
    error::{AppError, AppResult},
    middleware::auth::{hash_password, verify_password},
    models::Admin,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn validate_login(state: &AppState, payload: AdminLoginRequest) -> AppResult<AdminModel> {
    let admin = Admins::find()
        .filter(Column::Nic.eq(payload.nic.trim()))
        .one(&state.orm)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&payload.password, &admin.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    Ok(admin)
}

pub async fn create_admin(state: &AppState, payload: AdminCreateRequest) -> AppResult<Admin> {
    let nic = payload.nic.trim().to_string();
    if nic.is_empty() {
        return Err(AppError::Validation("NIC is required".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }

    let exists = Admins::find()
        .filter(Column::Nic.eq(nic.as_str()))
        .one(&state.orm)
        .await?
        .is_some();
    if exists {
        return Err(AppError::DuplicateName("Admin NIC already exists".into()));
    }

    let admin = ActiveModel {
        id: NotSet,
        nic: Set(nic),
        name: Set(payload.name.trim().to_string()),
        password_hash: Set(hash_password(&payload.password)?),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(admin_id = admin.id, "admin created");
    Ok(admin_from_entity(admin))
}

pub async fn list_admins(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<Vec<Admin>>> {
    let (page, limit, offset) = pagination.normalize();

    let finder = Admins::find().order_by_asc(Column::Id);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(admin_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Admins", items, Some(meta)))
}

fn admin_from_entity(model: AdminModel) -> Admin {
    Admin {
        id: model.id,
        nic: model.nic,
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
