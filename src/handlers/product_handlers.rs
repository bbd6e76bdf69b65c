//! Product HTTP handlers.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::errors::{AppError, AppResult, RepositoryError};
use crate::models::ProductDto;
use crate::repository::ProductRepository;

/// Configure product routes. `search` must be registered ahead of the
/// by-category route so "search" is not captured as a path id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/product")
            .service(list_products)
            .service(search_products)
            .service(list_by_category)
            .service(create_product)
            .service(update_product)
            .service(delete_product),
    );
}

/// List all products joined with their owning category.
#[get("")]
async fn list_products(repo: web::Data<ProductRepository>) -> AppResult<HttpResponse> {
    let products = repo.list().await?;

    Ok(HttpResponse::Ok().json(products))
}

/// Products whose name contains the given substring, case-insensitively.
#[get("/search")]
async fn search_products(
    repo: web::Data<ProductRepository>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let products = repo.search_by_name(&query.name).await?;

    Ok(HttpResponse::Ok().json(products))
}

/// Products belonging to the given category.
#[get("/{category_id}")]
async fn list_by_category(
    repo: web::Data<ProductRepository>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let products = repo.list_by_category(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(products))
}

/// Create a product. The payload id is ignored; the response carries the
/// assigned id and the resolved category name (null when the category does
/// not exist).
#[post("")]
async fn create_product(
    repo: web::Data<ProductRepository>,
    body: web::Json<ProductDto>,
) -> AppResult<HttpResponse> {
    let product = repo
        .create(&body.name, body.price, body.category_id)
        .await?;

    Ok(HttpResponse::Created().json(product))
}

/// Replace the mutable fields of an existing product.
#[put("/{id}")]
async fn update_product(
    repo: web::Data<ProductRepository>,
    path: web::Path<i64>,
    body: web::Json<ProductDto>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if id != body.id {
        return Err(AppError::IdMismatch);
    }

    repo.update(id, &body.name, body.price, body.category_id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::ProductNotFound(id),
            other => other.into(),
        })?;

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a product.
#[delete("/{id}")]
async fn delete_product(
    repo: web::Data<ProductRepository>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    repo.delete(id).await.map_err(|e| match e {
        RepositoryError::NotFound => AppError::ProductNotFound(id),
        other => other.into(),
    })?;

    Ok(HttpResponse::NoContent().finish())
}

#[derive(serde::Deserialize)]
struct SearchQuery {
    name: String,
}
