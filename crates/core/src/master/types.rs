//! Master data record types.

use assetbook_shared::types::{CategoryId, LocationId, SubcategoryId};
use serde::{Deserialize, Serialize};

/// Top-level equipment category (e.g., office machines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Short code used as the management-number prefix.
    #[serde(default)]
    pub code: Option<String>,
    /// Display name.
    pub name: String,
    /// Default useful life for equipment in this category.
    #[serde(default)]
    pub useful_life_years: Option<u32>,
}

/// Subcategory within a category (e.g., printers under office machines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    /// Subcategory ID.
    pub id: SubcategoryId,
    /// Owning category.
    pub category_id: CategoryId,
    /// Display name.
    pub name: String,
    /// Default useful life, overriding the category's.
    #[serde(default)]
    pub useful_life_years: Option<u32>,
}

/// Installation location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Location ID.
    pub id: LocationId,
    /// Display name.
    pub name: String,
}
