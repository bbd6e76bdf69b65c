//! Data access layer: explicit parameterized SQL over the shared pool.

pub mod category_repository;
pub mod product_repository;

pub use category_repository::CategoryRepository;
pub use product_repository::ProductRepository;
