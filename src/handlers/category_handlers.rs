//! Category HTTP handlers.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::errors::{AppError, AppResult, RepositoryError};
use crate::models::CategoryDto;
use crate::repository::CategoryRepository;

/// Configure category routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/category")
            .service(list_categories)
            .service(create_category)
            .service(update_category)
            .service(delete_category),
    );
}

/// List all categories.
#[get("")]
async fn list_categories(repo: web::Data<CategoryRepository>) -> AppResult<HttpResponse> {
    let categories = repo.list().await?;

    let dtos: Vec<CategoryDto> = categories
        .into_iter()
        .map(|c| CategoryDto {
            id: c.id,
            name: c.name,
        })
        .collect();

    Ok(HttpResponse::Ok().json(dtos))
}

/// Create a category. Any id in the payload is ignored; the assigned id is
/// echoed back.
#[post("")]
async fn create_category(
    repo: web::Data<CategoryRepository>,
    body: web::Json<CategoryDto>,
) -> AppResult<HttpResponse> {
    let category = repo.create(&body.name).await?;

    Ok(HttpResponse::Created().json(CategoryDto {
        id: category.id,
        name: category.name,
    }))
}

/// Replace the name of an existing category.
#[put("/{id}")]
async fn update_category(
    repo: web::Data<CategoryRepository>,
    path: web::Path<i64>,
    body: web::Json<CategoryDto>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if id != body.id {
        return Err(AppError::IdMismatch);
    }

    repo.update(id, &body.name).await.map_err(|e| match e {
        RepositoryError::NotFound => AppError::CategoryNotFound(id),
        other => other.into(),
    })?;

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a category.
#[delete("/{id}")]
async fn delete_category(
    repo: web::Data<CategoryRepository>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    repo.delete(id).await.map_err(|e| match e {
        RepositoryError::NotFound => AppError::CategoryNotFound(id),
        other => other.into(),
    })?;

    Ok(HttpResponse::NoContent().finish())
}
