//! Depreciation result types.

use assetbook_shared::types::Money;
use serde::{Deserialize, Serialize};

/// Where an asset stands in its depreciation schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepreciationStatus {
    /// Still depreciating; book value follows the straight line.
    Active,
    /// Useful life fully elapsed; book value is zero.
    Completed,
    /// Purchase date or useful life missing; no depreciation applied.
    Unknown,
}

impl DepreciationStatus {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DepreciationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a depreciation calculation.
///
/// Amounts are unrounded; call [`DepreciationResult::rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationResult {
    /// Whole years in service, clamped to `[0, lifespan]`.
    pub elapsed_years: u32,
    /// Useful life the calculation used, if one was available.
    pub lifespan_years: Option<u32>,
    /// Annual straight-line depreciation. Zero unless active.
    pub annual_depreciation: Money,
    /// Book value as of the reference date.
    pub book_value: Money,
    /// Schedule status.
    pub status: DepreciationStatus,
}

impl DepreciationResult {
    /// Whole years of useful life left. `None` when the status is unknown.
    #[must_use]
    pub fn remaining_years(&self) -> Option<u32> {
        match self.status {
            DepreciationStatus::Unknown => None,
            _ => self
                .lifespan_years
                .map(|life| life.saturating_sub(self.elapsed_years)),
        }
    }

    /// Copy with monetary figures rounded to `decimal_places`.
    #[must_use]
    pub fn rounded(&self, decimal_places: u32) -> Self {
        Self {
            annual_depreciation: self.annual_depreciation.rounded(decimal_places),
            book_value: self.book_value.rounded(decimal_places),
            ..*self
        }
    }
}
