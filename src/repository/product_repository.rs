//! Product repository.
//!
//! Every list projection joins the owning category so `category_name`
//! resolves to NULL for dangling `category_id` references.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::errors::{RepoResult, RepositoryError};
use crate::models::ProductDto;

const DTO_SELECT: &str = "SELECT p.id, p.name, p.price, p.category_id, c.name AS category_name \
     FROM products p LEFT JOIN categories c ON c.id = p.category_id";

pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All products joined with their category.
    pub async fn list(&self) -> RepoResult<Vec<ProductDto>> {
        let rows = sqlx::query(DTO_SELECT).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(map_row).collect())
    }

    /// Products belonging to the given category.
    pub async fn list_by_category(&self, category_id: i64) -> RepoResult<Vec<ProductDto>> {
        let sql = format!("{DTO_SELECT} WHERE p.category_id = ?1");
        let rows = sqlx::query(&sql)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(map_row).collect())
    }

    /// Products whose name contains `term`, case-insensitively. `instr`
    /// keeps `%` and `_` in the term literal, unlike a LIKE pattern.
    pub async fn search_by_name(&self, term: &str) -> RepoResult<Vec<ProductDto>> {
        let sql = format!("{DTO_SELECT} WHERE instr(lower(p.name), lower(?1)) > 0");
        let rows = sqlx::query(&sql).bind(term).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(map_row).collect())
    }

    /// Insert a product, then re-fetch the joined row so the response
    /// carries the assigned id and the resolved category name.
    pub async fn create(&self, name: &str, price: f64, category_id: i64) -> RepoResult<ProductDto> {
        let result =
            sqlx::query("INSERT INTO products (name, price, category_id) VALUES (?1, ?2, ?3)")
                .bind(name)
                .bind(price)
                .bind(category_id)
                .execute(&self.pool)
                .await?;

        let sql = format!("{DTO_SELECT} WHERE p.id = ?1");
        let row = sqlx::query(&sql)
            .bind(result.last_insert_rowid())
            .fetch_one(&self.pool)
            .await?;

        Ok(map_row(&row))
    }

    /// Overwrite the mutable fields of an existing product.
    pub async fn update(&self, id: i64, name: &str, price: f64, category_id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE products SET name = ?2, price = ?3, category_id = ?4 WHERE id = ?1",
        )
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(category_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_row(row: &SqliteRow) -> ProductDto {
    ProductDto {
        id: row.get("id"),
        name: row.get("name"),
        price: row.get("price"),
        category_id: row.get("category_id"),
        category_name: row.get("category_name"),
    }
}
