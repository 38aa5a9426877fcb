use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::{
        Availability, ProductCategories, Products,
        product_categories::Model as CategoryModel,
        products::{ActiveModel, Column, Model as ProductModel},
    },
    error::{AppError, AppResult},
    models::{CategoryRef, Product},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<ProductList>> {
    list_filtered(state, pagination, Condition::all(), "Products").await
}

/// Products a new order can reference: in stock or open for preorder.
pub async fn list_available_products(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<ProductList>> {
    let condition = Condition::any()
        .add(Column::Availability.eq(Availability::InStock))
        .add(Column::Availability.eq(Availability::Preorder));
    list_filtered(state, pagination, condition, "Available products").await
}

async fn list_filtered(
    state: &AppState,
    pagination: Pagination,
    condition: Condition,
    message: &str,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = pagination.normalize();

    let finder = Products::find()
        .filter(condition)
        .order_by_asc(Column::Name);
    let total = finder.clone().count(&state.orm).await? as i64;

    let rows = finder
        .find_also_related(ProductCategories)
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?;

    let items = rows
        .into_iter()
        .map(|(product, category)| product_from_entity(product, category))
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(message, ProductList { items }, Some(meta)))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<Product> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Product name is required".into()));
    }
    if name_taken(state, &name, None).await? {
        return Err(AppError::DuplicateName("Product name already exists".into()));
    }

    let category = resolve_category(state, payload.category_id).await?;

    let product = ActiveModel {
        id: NotSet,
        name: Set(name),
        description: Set(payload.description),
        price: Set(payload.price),
        availability: Set(payload.availability.unwrap_or(Availability::InStock)),
        category_id: Set(category.as_ref().map(|c| c.id)),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(product_from_entity(product, category))
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<Product> {
    let existing = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

    if let Some(name) = payload.name.as_deref() {
        let name = name.trim();
        if !name.eq_ignore_ascii_case(&existing.name) && name_taken(state, name, Some(id)).await? {
            return Err(AppError::DuplicateName("Product name already exists".into()));
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
    if let Some(availability) = payload.availability {
        active.availability = Set(availability);
    }
    if payload.category_id.is_some() {
        let category = resolve_category(state, payload.category_id).await?;
        active.category_id = Set(category.map(|c| c.id));
    }

    let product = active.update(&state.orm).await?;
    let category = resolve_category(state, product.category_id).await?;
    Ok(product_from_entity(product, category))
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Product not found".into()));
    }
    Ok(())
}

async fn resolve_category(
    state: &AppState,
    category_id: Option<i32>,
) -> AppResult<Option<CategoryModel>> {
    match category_id {
        None => Ok(None),
        Some(id) => {
            let category = ProductCategories::find_by_id(id)
                .one(&state.orm)
                .await?
                .ok_or_else(|| AppError::NotFound("Category not found".into()))?;
            Ok(Some(category))
        }
    }
}

async fn name_taken(state: &AppState, name: &str, exclude: Option<i32>) -> AppResult<bool> {
    let mut finder = Products::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).eq(name.to_lowercase()));
    if let Some(id) = exclude {
        finder = finder.filter(Column::Id.ne(id));
    }
    Ok(finder.one(&state.orm).await?.is_some())
}

pub fn product_from_entity(model: ProductModel, category: Option<CategoryModel>) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        availability: model.availability,
        category: category.map(|c| CategoryRef {
            id: c.id,
            name: c.name,
        }),
        created_at: model.created_at.with_timezone(&Utc),
    }
}
