//! Depreciation engine.
//!
//! Straight-line, no salvage value, whole-year steps. A stateless pure
//! function of (cost, purchase date, useful life, reference date).

use assetbook_shared::types::Money;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use super::types::{DepreciationResult, DepreciationStatus};

/// Engine for straight-line depreciation.
pub struct DepreciationEngine;

impl DepreciationEngine {
    /// Computes depreciation as of `reference_date`.
    ///
    /// - Missing purchase date, or a missing or zero useful life: `Unknown`,
    ///   no depreciation, book value equals cost.
    /// - Whole years in service at or past the useful life: `Completed`,
    ///   annual depreciation and book value zero.
    /// - Otherwise `Active` with `book = max(0, cost - annual * elapsed)`.
    ///
    /// Partial years are truncated: 11 months in service counts as 0 years.
    ///
    /// # Example
    ///
    /// ```
    /// use assetbook_core::depreciation::{DepreciationEngine, DepreciationStatus};
    /// use assetbook_shared::types::{Currency, Money};
    /// use chrono::NaiveDate;
    /// use rust_decimal_macros::dec;
    ///
    /// let result = DepreciationEngine::compute(
    ///     Money::new(dec!(1200000), Currency::Jpy),
    ///     NaiveDate::from_ymd_opt(2020, 4, 1),
    ///     Some(10),
    ///     NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
    /// );
    /// assert_eq!(result.status, DepreciationStatus::Active);
    /// assert_eq!(result.book_value.amount, dec!(600000));
    /// ```
    #[must_use]
    pub fn compute(
        cost: Money,
        purchase_date: Option<NaiveDate>,
        lifespan_years: Option<u32>,
        reference_date: NaiveDate,
    ) -> DepreciationResult {
        let (Some(purchased), Some(life)) = (purchase_date, lifespan_years.filter(|y| *y > 0))
        else {
            return DepreciationResult {
                elapsed_years: 0,
                lifespan_years: lifespan_years.filter(|y| *y > 0),
                annual_depreciation: Money::zero(cost.currency),
                book_value: cost,
                status: DepreciationStatus::Unknown,
            };
        };

        let in_service = Self::whole_years_between(purchased, reference_date);

        if in_service >= life {
            return DepreciationResult {
                elapsed_years: life,
                lifespan_years: Some(life),
                annual_depreciation: Money::zero(cost.currency),
                book_value: Money::zero(cost.currency),
                status: DepreciationStatus::Completed,
            };
        }

        let annual = cost.amount / Decimal::from(life);
        let book = (cost.amount - annual * Decimal::from(in_service)).max(Decimal::ZERO);

        DepreciationResult {
            elapsed_years: in_service,
            lifespan_years: Some(life),
            annual_depreciation: cost.with_amount(annual),
            book_value: cost.with_amount(book),
            status: DepreciationStatus::Active,
        }
    }

    /// Computes depreciation as of today's local date.
    #[must_use]
    pub fn compute_today(
        cost: Money,
        purchase_date: Option<NaiveDate>,
        lifespan_years: Option<u32>,
    ) -> DepreciationResult {
        Self::compute(
            cost,
            purchase_date,
            lifespan_years,
            Local::now().date_naive(),
        )
    }

    /// Whole calendar years from `from` to `to`, truncated. Zero when `to` precedes `from`.
    #[must_use]
    pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
        to.years_since(from).unwrap_or(0)
    }
}
