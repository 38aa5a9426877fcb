use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
    entity::{
        ProductCategories,
        product_categories::{ActiveModel, Column, Model as CategoryModel},
    },
    error::{AppError, AppResult},
    models::ProductCategory,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_categories(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<CategoryList>> {
    let (page, limit, offset) = pagination.normalize();

    let finder = ProductCategories::find().order_by_asc(Column::Name);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(meta),
    ))
}

pub async fn create_category(
    state: &AppState,
    payload: CreateCategoryRequest,
) -> AppResult<ProductCategory> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Category name is required".into()));
    }
    if name_taken(state, &name, None).await? {
        return Err(AppError::DuplicateName("Category name already exists".into()));
    }

    let category = ActiveModel {
        id: NotSet,
        name: Set(name),
        description: Set(payload.description),
    }
    .insert(&state.orm)
    .await?;

    Ok(category_from_entity(category))
}

pub async fn update_category(
    state: &AppState,
    id: i32,
    payload: UpdateCategoryRequest,
) -> AppResult<ProductCategory> {
    let existing = ProductCategories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".into()))?;

    if let Some(name) = payload.name.as_deref() {
        let name = name.trim();
        if !name.eq_ignore_ascii_case(&existing.name) && name_taken(state, name, Some(id)).await? {
            return Err(AppError::DuplicateName("Category name already exists".into()));
        }
    }

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }

    let category = active.update(&state.orm).await?;
    Ok(category_from_entity(category))
}

pub async fn delete_category(state: &AppState, id: i32) -> AppResult<()> {
    let result = ProductCategories::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Category not found".into()));
    }
    Ok(())
}

async fn name_taken(state: &AppState, name: &str, exclude: Option<i32>) -> AppResult<bool> {
    let mut finder = ProductCategories::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.to_lowercase()));
    if let Some(id) = exclude {
        finder = finder.filter(Column::Id.ne(id));
    }
    Ok(finder.one(&state.orm).await?.is_some())
}

pub fn category_from_entity(model: CategoryModel) -> ProductCategory {
    ProductCategory {
        id: model.id,
        name: model.name,
        description: model.description,
    }
}
