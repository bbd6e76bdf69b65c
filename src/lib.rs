//! Catalog API: categories and products over a SQLite store.
//!
//! Two resource handlers sit atop per-resource repositories that run
//! explicit parameterized SQL against a shared pool. There is no service
//! layer in between.

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;

use actix_web::web;
use sqlx::SqlitePool;

use crate::repository::{CategoryRepository, ProductRepository};

/// Wire repositories and routes onto an app. Used by the binary and by the
/// integration tests.
pub fn configure_app(pool: SqlitePool) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(CategoryRepository::new(pool.clone())));
        cfg.app_data(web::Data::new(ProductRepository::new(pool)));
        handlers::category_handlers::configure(cfg);
        handlers::product_handlers::configure(cfg);
    }
}
