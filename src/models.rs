//! Catalog entities and their wire shapes.
//!
//! Entities mirror the table rows one to one; DTOs are what the HTTP
//! surface accepts and returns. `ProductDto::category_name` is derived
//! by a join at query time and never stored.

use serde::{Deserialize, Serialize};

/// Category row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Category wire shape. On create the client may omit `id`; the assigned
/// id is echoed back in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}

/// Product wire shape, joined with the owning category's name. Product rows
/// never surface unjoined, so there is no separate entity struct for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    /// None when no category row matches `category_id`.
    #[serde(default)]
    pub category_name: Option<String>,
}
