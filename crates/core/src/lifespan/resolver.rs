//! Lifespan resolver.
//!
//! Precedence, first positive value wins:
//! 1. explicit per-asset useful life
//! 2. subcategory default
//! 3. category default
//! 4. system-wide fallback (zero disables it)

use std::collections::HashMap;

use assetbook_shared::types::{CategoryId, SubcategoryId};
use serde::{Deserialize, Serialize};

use crate::master::MasterData;

/// Which rule produced a resolved lifespan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifespanSource {
    /// Set on the asset itself.
    Explicit,
    /// Subcategory default.
    Subcategory,
    /// Category default.
    Category,
    /// System-wide fallback.
    Fallback,
}

/// A resolved useful life. `years` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLifespan {
    /// Useful life in whole years.
    pub years: u32,
    /// Rule that produced it.
    pub source: LifespanSource,
}

/// Maps an asset's lifespan inputs to a useful life.
///
/// Implementations must be deterministic for a given asset and master-data
/// state, and safe to share across threads.
pub trait LifespanResolver: Send + Sync {
    /// Resolves a useful life with its provenance. `None` if nothing applies.
    fn resolve_with_source(
        &self,
        explicit_years: Option<u32>,
        subcategory: Option<SubcategoryId>,
        category: Option<CategoryId>,
    ) -> Option<ResolvedLifespan>;

    /// Resolves a useful life in years. `None` if nothing applies.
    fn resolve(
        &self,
        explicit_years: Option<u32>,
        subcategory: Option<SubcategoryId>,
        category: Option<CategoryId>,
    ) -> Option<u32> {
        self.resolve_with_source(explicit_years, subcategory, category)
            .map(|resolved| resolved.years)
    }
}

/// Lifespan defaults keyed by subcategory and category.
#[derive(Debug, Clone, Default)]
pub struct UsefulLifeTable {
    by_subcategory: HashMap<SubcategoryId, u32>,
    by_category: HashMap<CategoryId, u32>,
    fallback_years: u32,
}

impl UsefulLifeTable {
    /// Creates an empty table with the given fallback.
    #[must_use]
    pub fn new(fallback_years: u32) -> Self {
        Self {
            fallback_years,
            ..Self::default()
        }
    }

    /// Builds a table from the defaults recorded in master data.
    #[must_use]
    pub fn from_master(master: &MasterData, fallback_years: u32) -> Self {
        let table = master
            .categories()
            .filter_map(|c| c.useful_life_years.map(|years| (c.id, years)))
            .fold(Self::new(fallback_years), |table, (id, years)| {
                table.with_category(id, years)
            });

        master
            .subcategories()
            .filter_map(|s| s.useful_life_years.map(|years| (s.id, years)))
            .fold(table, |table, (id, years)| {
                table.with_subcategory(id, years)
            })
    }

    /// Sets a category default. Zero entries are ignored.
    #[must_use]
    pub fn with_category(mut self, id: CategoryId, years: u32) -> Self {
        if years > 0 {
            self.by_category.insert(id, years);
        }
        self
    }

    /// Sets a subcategory default. Zero entries are ignored.
    #[must_use]
    pub fn with_subcategory(mut self, id: SubcategoryId, years: u32) -> Self {
        if years > 0 {
            self.by_subcategory.insert(id, years);
        }
        self
    }

    /// The configured fallback, zero when disabled.
    #[must_use]
    pub fn fallback_years(&self) -> u32 {
        self.fallback_years
    }
}

impl LifespanResolver for UsefulLifeTable {
    fn resolve_with_source(
        &self,
        explicit_years: Option<u32>,
        subcategory: Option<SubcategoryId>,
        category: Option<CategoryId>,
    ) -> Option<ResolvedLifespan> {
        let found = |years: u32, source| ResolvedLifespan { years, source };

        explicit_years
            .filter(|years| *years > 0)
            .map(|years| found(years, LifespanSource::Explicit))
            .or_else(|| {
                subcategory
                    .and_then(|id| self.by_subcategory.get(&id).copied())
                    .map(|years| found(years, LifespanSource::Subcategory))
            })
            .or_else(|| {
                category
                    .and_then(|id| self.by_category.get(&id).copied())
                    .map(|years| found(years, LifespanSource::Category))
            })
            .or_else(|| {
                (self.fallback_years > 0)
                    .then(|| found(self.fallback_years, LifespanSource::Fallback))
            })
    }
}
