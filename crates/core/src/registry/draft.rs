//! Registration drafts.
//!
//! Form-style input for registering or editing equipment: dates arrive as
//! separate year / month / day fields and master-data references as raw
//! codes. A draft is validated into an [`Equipment`] record.

use std::str::FromStr;

use assetbook_shared::AppError;
use assetbook_shared::types::{CategoryId, EquipmentId, InvalidId, LocationId, Money, SubcategoryId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Equipment;
use crate::master::MasterData;

/// Draft validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// Required text field is blank.
    #[error("Field is required: {0}")]
    MissingField(&'static str),

    /// Year / month / day do not form a calendar date.
    #[error("Invalid {field}: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Which date field.
        field: &'static str,
        /// Year part.
        year: i32,
        /// Month part.
        month: u32,
        /// Day part.
        day: u32,
    },

    /// Cost below zero.
    #[error("Cost cannot be negative")]
    NegativeCost,

    /// Quantity of zero.
    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    /// Useful life of zero.
    #[error("Useful life must be at least 1 year")]
    ZeroLifespan,

    /// A master-data code is malformed.
    #[error(transparent)]
    InvalidReference(#[from] InvalidId),

    /// A master-data code is well-formed but does not exist.
    #[error("Unknown {kind}: {id}")]
    UnknownReference {
        /// Which reference.
        kind: &'static str,
        /// The missing ID.
        id: i32,
    },

    /// Subcategory belongs to a different category.
    #[error("Subcategory {subcategory} does not belong to category {category}")]
    SubcategoryMismatch {
        /// Selected subcategory.
        subcategory: SubcategoryId,
        /// Selected category.
        category: CategoryId,
    },
}

impl From<DraftError> for AppError {
    fn from(err: DraftError) -> Self {
        match err {
            DraftError::UnknownReference { .. } => Self::NotFound(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}

/// A date split into form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    /// Year.
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
    /// Day of month.
    pub day: u32,
}

impl DateParts {
    /// Creates date parts.
    #[must_use]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Assembles a calendar date, naming `field` in the error.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::InvalidDate` for impossible dates (e.g., February 30).
    pub fn to_date(self, field: &'static str) -> Result<NaiveDate, DraftError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or(DraftError::InvalidDate {
                field,
                year: self.year,
                month: self.month,
                day: self.day,
            })
    }
}

/// Equipment registration or edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentDraft {
    /// Management number.
    pub management_number: String,
    /// Category code.
    #[serde(default)]
    pub category_code: Option<String>,
    /// Subcategory code.
    #[serde(default)]
    pub subcategory_code: Option<String>,
    /// Equipment name.
    pub name: String,
    /// Model number.
    #[serde(default)]
    pub model_number: Option<String>,
    /// Manufacturer.
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// Specification.
    #[serde(default)]
    pub specification: Option<String>,
    /// Acquisition cost.
    pub cost: Money,
    /// Purchase date fields.
    pub purchase: DateParts,
    /// Usage deadline year.
    #[serde(default)]
    pub usage_deadline_year: Option<i32>,
    /// Usage deadline month.
    #[serde(default)]
    pub usage_deadline_month: Option<u32>,
    /// Usage deadline day.
    #[serde(default)]
    pub usage_deadline_day: Option<u32>,
    /// Number of units.
    pub quantity: u32,
    /// Location code.
    #[serde(default)]
    pub location_code: Option<String>,
    /// Out of order.
    #[serde(default)]
    pub is_broken: bool,
    /// Can be lent out.
    #[serde(default)]
    pub is_available_for_loan: bool,
    /// Explicit useful life.
    #[serde(default)]
    pub lifespan_years: Option<u32>,
}

impl EquipmentDraft {
    /// Validates the draft into a new record with the given ID.
    ///
    /// The usage deadline is set only when all three of its fields are present.
    ///
    /// # Errors
    ///
    /// Returns the first `DraftError` found.
    pub fn into_equipment(self, id: EquipmentId) -> Result<Equipment, DraftError> {
        let management_number = required("management_number", self.management_number)?;
        let name = required("name", self.name)?;

        if self.cost.is_negative() {
            return Err(DraftError::NegativeCost);
        }
        if self.quantity == 0 {
            return Err(DraftError::ZeroQuantity);
        }
        if self.lifespan_years == Some(0) {
            return Err(DraftError::ZeroLifespan);
        }

        let purchase_date = self.purchase.to_date("purchase date")?;
        let usage_deadline = match (
            self.usage_deadline_year,
            self.usage_deadline_month,
            self.usage_deadline_day,
        ) {
            (Some(year), Some(month), Some(day)) => {
                Some(DateParts::new(year, month, day).to_date("usage deadline")?)
            }
            _ => None,
        };

        Ok(Equipment {
            id,
            management_number,
            category_id: parse_code(self.category_code.as_deref())?,
            subcategory_id: parse_code(self.subcategory_code.as_deref())?,
            name,
            model_number: optional(self.model_number),
            manufacturer: optional(self.manufacturer),
            specification: optional(self.specification),
            cost: self.cost,
            purchase_date: Some(purchase_date),
            quantity: self.quantity,
            location_id: parse_code(self.location_code.as_deref())?,
            is_broken: self.is_broken,
            is_available_for_loan: self.is_available_for_loan,
            usage_deadline,
            lifespan_years: self.lifespan_years,
        })
    }

    /// Validates the draft as an edit of `existing`, keeping its ID.
    ///
    /// Every field is replaced; a usage deadline absent from the form is cleared.
    ///
    /// # Errors
    ///
    /// Returns the first `DraftError` found.
    pub fn apply_to(self, existing: &Equipment) -> Result<Equipment, DraftError> {
        self.into_equipment(existing.id)
    }

    /// Validates the draft and checks its references against master data.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::UnknownReference` for missing master data and
    /// `DraftError::SubcategoryMismatch` when the subcategory belongs elsewhere.
    pub fn into_checked_equipment(
        self,
        id: EquipmentId,
        master: &MasterData,
    ) -> Result<Equipment, DraftError> {
        let equipment = self.into_equipment(id)?;

        if let Some(category) = equipment.category_id
            && master.category(category).is_none()
        {
            return Err(DraftError::UnknownReference {
                kind: "category",
                id: category.into_inner(),
            });
        }
        if let Some(subcategory) = equipment.subcategory_id {
            let Some(found) = master.subcategory(subcategory) else {
                return Err(DraftError::UnknownReference {
                    kind: "subcategory",
                    id: subcategory.into_inner(),
                });
            };
            if let Some(category) = equipment.category_id
                && found.category_id != category
            {
                return Err(DraftError::SubcategoryMismatch {
                    subcategory,
                    category,
                });
            }
        }
        if let Some(location) = equipment.location_id
            && master.location(location).is_none()
        {
            return Err(DraftError::UnknownReference {
                kind: "location",
                id: location.into_inner(),
            });
        }

        Ok(equipment)
    }
}

fn required(field: &'static str, value: String) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Blank codes mean "not selected"; anything else must parse.
fn parse_code<T>(code: Option<&str>) -> Result<Option<T>, DraftError>
where
    T: FromStr<Err = InvalidId>,
{
    match code.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Ok(Some(raw.parse::<T>()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::master::{Category, Location, MasterRecords, Subcategory};
    use assetbook_shared::types::Currency;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn draft() -> EquipmentDraft {
        EquipmentDraft {
            management_number: " OM2026-0001 ".to_string(),
            category_code: Some("1".to_string()),
            subcategory_code: Some("11".to_string()),
            name: "Copier".to_string(),
            model_number: Some("C-204".to_string()),
            manufacturer: Some(String::new()),
            specification: None,
            cost: Money::new(dec!(450000), Currency::Jpy),
            purchase: DateParts::new(2026, 4, 1),
            usage_deadline_year: None,
            usage_deadline_month: None,
            usage_deadline_day: None,
            quantity: 2,
            location_code: Some("3".to_string()),
            is_broken: false,
            is_available_for_loan: true,
            lifespan_years: None,
        }
    }

    fn master() -> MasterData {
        MasterData::new(MasterRecords {
            categories: vec![
                Category {
                    id: CategoryId::new(1),
                    code: Some("OM".to_string()),
                    name: "Office machines".to_string(),
                    useful_life_years: Some(5),
                },
                Category {
                    id: CategoryId::new(2),
                    code: None,
                    name: "Furniture".to_string(),
                    useful_life_years: Some(8),
                },
            ],
            subcategories: vec![Subcategory {
                id: SubcategoryId::new(11),
                category_id: CategoryId::new(1),
                name: "Copiers".to_string(),
                useful_life_years: None,
            }],
            locations: vec![Location {
                id: LocationId::new(3),
                name: "Annex".to_string(),
            }],
        })
        .unwrap()
    }

    #[test]
    fn test_into_equipment() {
        let id = EquipmentId::new();
        let equipment = draft().into_equipment(id).unwrap();

        assert_eq!(equipment.id, id);
        assert_eq!(equipment.management_number, "OM2026-0001");
        assert_eq!(equipment.category_id, Some(CategoryId::new(1)));
        assert_eq!(equipment.subcategory_id, Some(SubcategoryId::new(11)));
        assert_eq!(equipment.location_id, Some(LocationId::new(3)));
        assert_eq!(equipment.manufacturer, None);
        assert_eq!(equipment.purchase_date, NaiveDate::from_ymd_opt(2026, 4, 1));
        assert_eq!(equipment.usage_deadline, None);
        assert_eq!(equipment.quantity, 2);
    }

    #[test]
    fn test_usage_deadline_requires_all_parts() {
        let mut partial = draft();
        partial.usage_deadline_year = Some(2030);
        partial.usage_deadline_month = Some(3);
        let equipment = partial.into_equipment(EquipmentId::new()).unwrap();
        assert_eq!(equipment.usage_deadline, None);

        let mut full = draft();
        full.usage_deadline_year = Some(2030);
        full.usage_deadline_month = Some(3);
        full.usage_deadline_day = Some(31);
        let equipment = full.into_equipment(EquipmentId::new()).unwrap();
        assert_eq!(
            equipment.usage_deadline,
            NaiveDate::from_ymd_opt(2030, 3, 31)
        );
    }

    #[test]
    fn test_apply_to_keeps_id_and_clears_deadline() {
        let mut existing = draft().into_equipment(EquipmentId::new()).unwrap();
        existing.usage_deadline = NaiveDate::from_ymd_opt(2031, 1, 1);

        let mut edit = draft();
        edit.name = "Copier (refurbished)".to_string();
        let updated = edit.apply_to(&existing).unwrap();

        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.name, "Copier (refurbished)");
        assert_eq!(updated.usage_deadline, None);
    }

    #[rstest]
    #[case(2026, 2, 30)]
    #[case(2026, 13, 1)]
    #[case(2026, 0, 10)]
    #[case(2025, 2, 29)]
    fn test_invalid_purchase_date(#[case] year: i32, #[case] month: u32, #[case] day: u32) {
        let mut bad = draft();
        bad.purchase = DateParts::new(year, month, day);
        let err = bad.into_equipment(EquipmentId::new()).unwrap_err();
        assert_eq!(
            err,
            DraftError::InvalidDate {
                field: "purchase date",
                year,
                month,
                day,
            }
        );
    }

    #[test]
    fn test_invalid_date_display() {
        let err = DateParts::new(2026, 2, 30)
            .to_date("purchase date")
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid purchase date: 2026-02-30");
    }

    #[test]
    fn test_field_rules() {
        let mut blank = draft();
        blank.name = "   ".to_string();
        assert_eq!(
            blank.into_equipment(EquipmentId::new()).unwrap_err(),
            DraftError::MissingField("name")
        );

        let mut negative = draft();
        negative.cost = Money::new(dec!(-1), Currency::Jpy);
        assert_eq!(
            negative.into_equipment(EquipmentId::new()).unwrap_err(),
            DraftError::NegativeCost
        );

        let mut zero = draft();
        zero.quantity = 0;
        assert_eq!(
            zero.into_equipment(EquipmentId::new()).unwrap_err(),
            DraftError::ZeroQuantity
        );

        let mut no_life = draft();
        no_life.lifespan_years = Some(0);
        assert_eq!(
            no_life.into_equipment(EquipmentId::new()).unwrap_err(),
            DraftError::ZeroLifespan
        );
    }

    #[test]
    fn test_malformed_code_is_an_error() {
        let mut bad = draft();
        bad.category_code = Some("OM".to_string());
        let err = bad.into_equipment(EquipmentId::new()).unwrap_err();

        assert!(matches!(err, DraftError::InvalidReference(_)));
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Validation(_)));
    }

    #[test]
    fn test_blank_code_means_unselected() {
        let mut blank = draft();
        blank.location_code = Some("  ".to_string());
        blank.subcategory_code = None;
        let equipment = blank.into_equipment(EquipmentId::new()).unwrap();

        assert_eq!(equipment.location_id, None);
        assert_eq!(equipment.subcategory_id, None);
    }

    #[test]
    fn test_checked_against_master() {
        let master = master();
        let checked = draft().into_checked_equipment(EquipmentId::new(), &master);
        assert!(checked.is_ok());

        let mut missing = draft();
        missing.location_code = Some("99".to_string());
        let err = missing
            .into_checked_equipment(EquipmentId::new(), &master)
            .unwrap_err();
        assert_eq!(
            err,
            DraftError::UnknownReference {
                kind: "location",
                id: 99,
            }
        );
        assert!(matches!(AppError::from(err), AppError::NotFound(_)));

        let mut mismatch = draft();
        mismatch.category_code = Some("2".to_string());
        assert_eq!(
            mismatch
                .into_checked_equipment(EquipmentId::new(), &master)
                .unwrap_err(),
            DraftError::SubcategoryMismatch {
                subcategory: SubcategoryId::new(11),
                category: CategoryId::new(2),
            }
        );
    }
}
