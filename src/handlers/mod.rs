//! HTTP handlers, one module per resource.

pub mod category_handlers;
pub mod product_handlers;
