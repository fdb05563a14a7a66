//! Registry data types.

use assetbook_shared::types::{CategoryId, Currency, EquipmentId, LocationId, Money, SubcategoryId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::depreciation::DepreciationResult;
use crate::lifespan::ResolvedLifespan;

/// An equipment record as held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Equipment ID.
    pub id: EquipmentId,
    /// Human-facing management number (e.g., "OM2024-0001").
    pub management_number: String,
    /// Category.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Subcategory.
    #[serde(default)]
    pub subcategory_id: Option<SubcategoryId>,
    /// Equipment name.
    pub name: String,
    /// Model number.
    #[serde(default)]
    pub model_number: Option<String>,
    /// Manufacturer.
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Free-form specification.
    #[serde(default)]
    pub specification: Option<String>,
    /// Acquisition cost.
    pub cost: Money,
    /// Purchase date, if known.
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    /// Number of units.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Installation location.
    #[serde(default)]
    pub location_id: Option<LocationId>,
    /// Out of order.
    #[serde(default)]
    pub is_broken: bool,
    /// Can be lent out.
    #[serde(default)]
    pub is_available_for_loan: bool,
    /// Date after which the equipment should no longer be used.
    #[serde(default)]
    pub usage_deadline: Option<NaiveDate>,
    /// Explicit useful life overriding master-data defaults.
    #[serde(default)]
    pub lifespan_years: Option<u32>,
}

fn default_quantity() -> u32 {
    1
}

/// One line of the equipment listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRow {
    /// The underlying record.
    #[serde(flatten)]
    pub equipment: Equipment,
    /// Category name, when the category exists.
    pub category_name: Option<String>,
    /// Subcategory name, when the subcategory exists.
    pub subcategory_name: Option<String>,
    /// Location name, or "unset" / "unknown".
    pub location_label: String,
    /// Useful life used for the calculation.
    pub lifespan: Option<ResolvedLifespan>,
    /// Depreciation figures, rounded for display.
    pub depreciation: DepreciationResult,
    /// Annual depreciation for active assets, otherwise the status name.
    pub status_label: String,
}

/// Cost and book value totals for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyTotal {
    /// Currency of the totals.
    pub currency: Currency,
    /// Sum of acquisition costs.
    pub total_cost: Decimal,
    /// Sum of book values.
    pub total_book_value: Decimal,
}

/// Aggregate figures for a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    /// Number of records.
    pub count: usize,
    /// Records still depreciating.
    pub active: usize,
    /// Records fully depreciated.
    pub completed: usize,
    /// Records without enough data to depreciate.
    pub unknown: usize,
    /// Totals per currency, in order of first appearance.
    pub totals: Vec<CurrencyTotal>,
}
