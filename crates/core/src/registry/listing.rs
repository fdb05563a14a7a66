//! Equipment listing with depreciation figures.

use assetbook_shared::types::{Currency, PageRequest, PageResponse};
use assetbook_shared::{AppError, AppResult};
use chrono::NaiveDate;
use rayon::prelude::*;
use rust_decimal::Decimal;

use super::types::{CurrencyTotal, Equipment, EquipmentRow, ListingSummary};
use crate::depreciation::{DepreciationEngine, DepreciationResult, DepreciationStatus};
use crate::lifespan::{LifespanResolver, ResolvedLifespan};
use crate::master::MasterData;

/// Builds listing rows from equipment records.
///
/// Rows are computed in parallel; output order always matches input order.
pub struct RegistryListing<'a> {
    master: &'a MasterData,
    resolver: &'a dyn LifespanResolver,
    scale: u32,
}

impl<'a> RegistryListing<'a> {
    /// Creates a listing over the given master data.
    ///
    /// `scale` is the number of decimal places monetary figures are rounded to.
    #[must_use]
    pub fn new(master: &'a MasterData, resolver: &'a dyn LifespanResolver, scale: u32) -> Self {
        Self {
            master,
            resolver,
            scale,
        }
    }

    /// Resolves the useful life and computes unrounded depreciation for one record.
    #[must_use]
    pub fn evaluate(
        &self,
        equipment: &Equipment,
        reference_date: NaiveDate,
    ) -> (Option<ResolvedLifespan>, DepreciationResult) {
        let lifespan = self.resolver.resolve_with_source(
            equipment.lifespan_years,
            equipment.subcategory_id,
            equipment.category_id,
        );
        let result = DepreciationEngine::compute(
            equipment.cost,
            equipment.purchase_date,
            lifespan.map(|resolved| resolved.years),
            reference_date,
        );
        (lifespan, result)
    }

    /// Builds the display row for one record.
    #[must_use]
    pub fn row(&self, equipment: &Equipment, reference_date: NaiveDate) -> EquipmentRow {
        let category_name = equipment.category_id.and_then(|id| {
            let found = self.master.category(id).map(|c| c.name.clone());
            if found.is_none() {
                tracing::warn!(equipment = %equipment.id, category = %id, "Unknown category");
            }
            found
        });
        let subcategory_name = equipment.subcategory_id.and_then(|id| {
            let found = self.master.subcategory(id).map(|s| s.name.clone());
            if found.is_none() {
                tracing::warn!(equipment = %equipment.id, subcategory = %id, "Unknown subcategory");
            }
            found
        });

        let (lifespan, result) = self.evaluate(equipment, reference_date);
        let shown = result.rounded(self.scale);

        EquipmentRow {
            equipment: equipment.clone(),
            category_name,
            subcategory_name,
            location_label: self.master.location_label(equipment.location_id).to_string(),
            lifespan,
            depreciation: shown,
            status_label: self.status_label(&shown),
        }
    }

    /// Builds rows for every record, preserving order.
    #[must_use]
    pub fn rows(&self, equipment: &[Equipment], reference_date: NaiveDate) -> Vec<EquipmentRow> {
        let rows: Vec<EquipmentRow> = equipment
            .par_iter()
            .map(|item| self.row(item, reference_date))
            .collect();
        tracing::debug!(count = rows.len(), %reference_date, "Built listing rows");
        rows
    }

    /// Builds rows for one page only.
    #[must_use]
    pub fn page(
        &self,
        equipment: &[Equipment],
        reference_date: NaiveDate,
        request: PageRequest,
    ) -> PageResponse<EquipmentRow> {
        let selected = PageResponse::from_items(equipment.iter().collect::<Vec<_>>(), request);
        let data = selected
            .data
            .par_iter()
            .map(|item| self.row(item, reference_date))
            .collect();

        PageResponse {
            data,
            meta: selected.meta,
        }
    }

    /// Aggregates status counts and per-currency totals over all records.
    ///
    /// Totals are summed from unrounded figures and rounded once at the end.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when a currency total exceeds the
    /// `Decimal` range.
    pub fn summarize(
        &self,
        equipment: &[Equipment],
        reference_date: NaiveDate,
    ) -> AppResult<ListingSummary> {
        let results: Vec<DepreciationResult> = equipment
            .par_iter()
            .map(|item| self.evaluate(item, reference_date).1)
            .collect();

        let mut summary = ListingSummary {
            count: equipment.len(),
            ..ListingSummary::default()
        };

        for (item, result) in equipment.iter().zip(&results) {
            match result.status {
                DepreciationStatus::Active => summary.active += 1,
                DepreciationStatus::Completed => summary.completed += 1,
                DepreciationStatus::Unknown => summary.unknown += 1,
            }

            let currency = item.cost.currency;
            let position = summary
                .totals
                .iter()
                .position(|total| total.currency == currency);
            let total = match position {
                Some(index) => &mut summary.totals[index],
                None => {
                    summary.totals.push(CurrencyTotal {
                        currency,
                        total_cost: Decimal::ZERO,
                        total_book_value: Decimal::ZERO,
                    });
                    let last = summary.totals.len() - 1;
                    &mut summary.totals[last]
                }
            };
            total.total_cost = checked_total(total.total_cost, item.cost.amount, currency)?;
            total.total_book_value =
                checked_total(total.total_book_value, result.book_value.amount, currency)?;
        }

        for total in &mut summary.totals {
            total.total_cost = self.round(total.total_cost);
            total.total_book_value = self.round(total.total_book_value);
        }

        Ok(summary)
    }

    /// Display label: annual depreciation for active assets, otherwise the status.
    fn status_label(&self, result: &DepreciationResult) -> String {
        match result.status {
            DepreciationStatus::Active => format!(
                "{:.prec$}",
                result.annual_depreciation.amount,
                prec = self.scale as usize
            ),
            status => status.to_string(),
        }
    }

    fn round(&self, value: Decimal) -> Decimal {
        value.round_dp_with_strategy(
            self.scale,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        )
    }
}

fn checked_total(total: Decimal, amount: Decimal, currency: Currency) -> AppResult<Decimal> {
    total
        .checked_add(amount)
        .ok_or_else(|| AppError::Validation(format!("{currency} total overflows")))
}
