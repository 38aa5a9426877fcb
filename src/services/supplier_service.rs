use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::suppliers::{CreateSupplierRequest, SupplierList, UpdateSupplierRequest},
    entity::{
        Suppliers,
        suppliers::{ActiveModel, Column, Model as SupplierModel},
    },
    error::{AppError, AppResult},
    models::Supplier,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_suppliers(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<SupplierList>> {
    let (page, limit, offset) = pagination.normalize();

    let finder = Suppliers::find().order_by_asc(Column::Id);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(supplier_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Suppliers",
        SupplierList { items },
        Some(meta),
    ))
}

pub async fn get_supplier(state: &AppState, id: i32) -> AppResult<Supplier> {
    let supplier = Suppliers::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Supplier not found with ID: {id}")))?;
    Ok(supplier_from_entity(supplier))
}

pub async fn create_supplier(
    state: &AppState,
    payload: CreateSupplierRequest,
) -> AppResult<Supplier> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Supplier name is required".into()));
    }
    let email = normalize_email(payload.email);

    if name_taken(state, &name, None).await? {
        return Err(AppError::DuplicateName("Supplier name already exists".into()));
    }
    if let Some(email) = email.as_deref() {
        if email_taken(state, email, None).await? {
            return Err(AppError::EmailAlreadyUsed);
        }
    }

    let supplier = ActiveModel {
        id: NotSet,
        name: Set(name),
        phone: Set(payload.phone.map(|p| p.trim().to_string())),
        email: Set(email),
        address: Set(payload.address.map(|a| a.trim().to_string())),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(supplier_from_entity(supplier))
}

pub async fn update_supplier(
    state: &AppState,
    id: i32,
    payload: UpdateSupplierRequest,
) -> AppResult<Supplier> {
    let existing = Suppliers::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Supplier not found with ID: {id}")))?;

    if let Some(name) = payload.name.as_deref() {
        let name = name.trim();
        if !name.eq_ignore_ascii_case(&existing.name) && name_taken(state, name, Some(id)).await? {
            return Err(AppError::DuplicateName("Supplier name already exists".into()));
        }
    }
    if let Some(email) = payload.email.as_deref() {
        let email = email.trim();
        let unchanged = existing
            .email
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case(email));
        if !email.is_empty() && !unchanged && email_taken(state, email, Some(id)).await? {
            return Err(AppError::EmailAlreadyUsed);
        }
    }

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(Some(phone.trim().to_string()));
    }
    if let Some(email) = payload.email {
        active.email = Set(normalize_email(Some(email)));
    }
    if let Some(address) = payload.address {
        active.address = Set(Some(address.trim().to_string()));
    }

    let supplier = active.update(&state.orm).await?;
    Ok(supplier_from_entity(supplier))
}

pub async fn delete_supplier(state: &AppState, id: i32) -> AppResult<()> {
    let result = Suppliers::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Supplier not found with ID: {id}")));
    }
    Ok(())
}

fn normalize_email(email: Option<String>) -> Option<String> {
    email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
}

async fn name_taken(state: &AppState, name: &str, exclude: Option<i32>) -> AppResult<bool> {
    let mut finder = Suppliers::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.to_lowercase()));
    if let Some(id) = exclude {
        finder = finder.filter(Column::Id.ne(id));
    }
    Ok(finder.one(&state.orm).await?.is_some())
}

async fn email_taken(state: &AppState, email: &str, exclude: Option<i32>) -> AppResult<bool> {
    let mut finder = Suppliers::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::Email))).eq(email.to_lowercase()));
    if let Some(id) = exclude {
        finder = finder.filter(Column::Id.ne(id));
    }
    Ok(finder.one(&state.orm).await?.is_some())
}

pub fn supplier_from_entity(model: SupplierModel) -> Supplier {
    Supplier {
        id: model.id,
        name: model.name,
        phone: model.phone,
        email: model.email,
        address: model.address,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
