use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::services::{CreateServiceRequest, ServiceList, UpdateServiceRequest},
    entity::{
        Services,
        services::{ActiveModel, Column, Model as ServiceModel},
    },
    error::{AppError, AppResult},
    models::ServiceItem,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_services(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<ServiceList>> {
    let (page, limit, offset) = pagination.normalize();

    let finder = Services::find().order_by_asc(Column::Name);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(service_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Services",
        ServiceList { items },
        Some(meta),
    ))
}

pub async fn create_service(
    state: &AppState,
    payload: CreateServiceRequest,
) -> AppResult<ServiceItem> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Service name is required".into()));
    }
    if name_taken(state, &name, None).await? {
        return Err(AppError::DuplicateName("Service name already exists".into()));
    }

    let service = ActiveModel {
        id: NotSet,
        name: Set(name),
        description: Set(payload.description),
        price: Set(payload.price),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(service_from_entity(service))
}

pub async fn update_service(
    state: &AppState,
    id: i32,
    payload: UpdateServiceRequest,
) -> AppResult<ServiceItem> {
    let existing = Services::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Service not found with ID: {id}")))?;

    if let Some(name) = payload.name.as_deref() {
        let name = name.trim();
        if !name.eq_ignore_ascii_case(&existing.name) && name_taken(state, name, Some(id)).await? {
            return Err(AppError::DuplicateName("Service name already exists".into()));
        }
    }

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }

    let service = active.update(&state.orm).await?;
    Ok(service_from_entity(service))
}

pub async fn delete_service(state: &AppState, id: i32) -> AppResult<()> {
    let result = Services::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("Service not found with ID: {id}")));
    }
    Ok(())
}

async fn name_taken(state: &AppState, name: &str, exclude: Option<i32>) -> AppResult<bool> {
    let mut finder = Services::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.to_lowercase()));
    if let Some(id) = exclude {
        finder = finder.filter(Column::Id.ne(id));
    }
    Ok(finder.one(&state.orm).await?.is_some())
}

pub fn service_from_entity(model: ServiceModel) -> ServiceItem {
    ServiceItem {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
