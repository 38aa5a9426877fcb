use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use axum_studio_api::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::{Admins, Availability, ProductCategories, Products, Services, admins, product_categories, products, services},
    middleware::auth::hash_password,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let admin_id = ensure_admin(&orm, "990000000V", "Studio Admin", "admin123").await?;
    seed_catalog(&orm).await?;

    println!("Seed completed. Admin ID: {admin_id}");
    Ok(())
}

async fn ensure_admin(orm: &OrmConn, nic: &str, name: &str, password: &str) -> anyhow::Result<i32> {
    if let Some(existing) = Admins::find()
        .filter(admins::Column::Nic.eq(nic))
        .one(orm)
        .await?
    {
        println!("Admin {nic} already present");
        return Ok(existing.id);
    }

    let admin = admins::ActiveModel {
        id: NotSet,
        nic: Set(nic.to_string()),
        name: Set(name.to_string()),
        password_hash: Set(hash_password(password)?),
        created_at: NotSet,
    }
    .insert(orm)
    .await?;

    println!("Ensured admin {nic}");
    Ok(admin.id)
}

async fn seed_catalog(orm: &OrmConn) -> anyhow::Result<()> {
    let category_id = match ProductCategories::find()
        .filter(product_categories::Column::Name.eq("Frames"))
        .one(orm)
        .await?
    {
        Some(category) => category.id,
        None => {
            product_categories::ActiveModel {
                id: NotSet,
                name: Set("Frames".to_string()),
                description: Set(Some("Photo frames and mounts".to_string())),
            }
            .insert(orm)
            .await?
            .id
        }
    };

    let catalog = [
        ("Classic Wooden Frame 8x10", "Oak frame with glass front", 2500),
        ("Canvas Print 16x20", "Stretched canvas on wooden bars", 6800),
        ("Photo Album 40 Pages", "Leather-bound album", 4200),
    ];
    for (name, desc, cents) in catalog {
        let exists = Products::find()
            .filter(products::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        products::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(Some(desc.to_string())),
            price: Set(Decimal::new(cents, 2)),
            availability: Set(Availability::InStock),
            category_id: Set(Some(category_id)),
            created_at: NotSet,
        }
        .insert(orm)
        .await?;
    }
    println!("Seeded products");

    let offerings = [
        ("Portrait Session", "One hour studio portrait session", 7500),
        ("Wedding Package", "Full day coverage with two photographers", 120000),
        ("Passport Photos", "Compliant passport and visa photos", 1500),
    ];
    for (name, desc, cents) in offerings {
        let exists = Services::find()
            .filter(services::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        services::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(Some(desc.to_string())),
            price: Set(Decimal::new(cents, 2)),
            created_at: NotSet,
        }
        .insert(orm)
        .await?;
    }
    println!("Seeded services");

    Ok(())
}
