//! Indexed master data.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use assetbook_shared::types::{CategoryId, LocationId, SubcategoryId};
use serde::{Deserialize, Serialize};

use super::error::MasterError;
use super::types::{Category, Location, Subcategory};

/// Label shown when equipment has no location assigned.
pub const LOCATION_UNSET: &str = "unset";
/// Label shown when equipment references a location that does not exist.
pub const LOCATION_UNKNOWN: &str = "unknown";

/// Master data as flat record lists, the shape callers supply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasterRecords {
    /// All categories.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// All subcategories.
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    /// All locations.
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// Master data indexed by ID.
///
/// Built from [`MasterRecords`]; construction rejects duplicate IDs and
/// subcategories whose category is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "MasterRecords", into = "MasterRecords")]
pub struct MasterData {
    categories: BTreeMap<CategoryId, Category>,
    subcategories: BTreeMap<SubcategoryId, Subcategory>,
    locations: BTreeMap<LocationId, Location>,
}

impl MasterData {
    /// Indexes master records.
    ///
    /// # Errors
    ///
    /// Returns `MasterError` on duplicate IDs or orphaned subcategories.
    pub fn new(records: MasterRecords) -> Result<Self, MasterError> {
        let mut categories = BTreeMap::new();
        for category in records.categories {
            match categories.entry(category.id) {
                Entry::Occupied(_) => return Err(MasterError::DuplicateCategory(category.id)),
                Entry::Vacant(slot) => {
                    slot.insert(category);
                }
            }
        }

        let mut subcategories = BTreeMap::new();
        for subcategory in records.subcategories {
            if !categories.contains_key(&subcategory.category_id) {
                return Err(MasterError::OrphanSubcategory {
                    subcategory: subcategory.id,
                    category: subcategory.category_id,
                });
            }
            match subcategories.entry(subcategory.id) {
                Entry::Occupied(_) => {
                    return Err(MasterError::DuplicateSubcategory(subcategory.id));
                }
                Entry::Vacant(slot) => {
                    slot.insert(subcategory);
                }
            }
        }

        let mut locations = BTreeMap::new();
        for location in records.locations {
            match locations.entry(location.id) {
                Entry::Occupied(_) => return Err(MasterError::DuplicateLocation(location.id)),
                Entry::Vacant(slot) => {
                    slot.insert(location);
                }
            }
        }

        Ok(Self {
            categories,
            subcategories,
            locations,
        })
    }

    /// Looks up a category.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    /// Looks up a subcategory.
    #[must_use]
    pub fn subcategory(&self, id: SubcategoryId) -> Option<&Subcategory> {
        self.subcategories.get(&id)
    }

    /// Looks up a location.
    #[must_use]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// All categories, ordered by ID.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// All subcategories, ordered by ID.
    pub fn subcategories(&self) -> impl Iterator<Item = &Subcategory> {
        self.subcategories.values()
    }

    /// All locations, ordered by ID.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Subcategories belonging to a category, ordered by ID.
    ///
    /// Empty for an unknown category.
    #[must_use]
    pub fn subcategories_of(&self, category_id: CategoryId) -> Vec<&Subcategory> {
        self.subcategories
            .values()
            .filter(|sub| sub.category_id == category_id)
            .collect()
    }

    /// Display label for an equipment location.
    #[must_use]
    pub fn location_label(&self, id: Option<LocationId>) -> &str {
        match id {
            None => LOCATION_UNSET,
            Some(id) => self
                .location(id)
                .map_or(LOCATION_UNKNOWN, |location| location.name.as_str()),
        }
    }
}

impl TryFrom<MasterRecords> for MasterData {
    type Error = MasterError;

    fn try_from(records: MasterRecords) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

impl From<MasterData> for MasterRecords {
    fn from(data: MasterData) -> Self {
        Self {
            categories: data.categories.into_values().collect(),
            subcategories: data.subcategories.into_values().collect(),
            locations: data.locations.into_values().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i32, name: &str) -> Category {
        Category {
            id: CategoryId::new(id),
            code: None,
            name: name.to_string(),
            useful_life_years: None,
        }
    }

    fn subcategory(id: i32, category_id: i32, name: &str) -> Subcategory {
        Subcategory {
            id: SubcategoryId::new(id),
            category_id: CategoryId::new(category_id),
            name: name.to_string(),
            useful_life_years: None,
        }
    }

    fn sample() -> MasterData {
        MasterData::new(MasterRecords {
            categories: vec![category(1, "Office machines"), category(2, "Furniture")],
            subcategories: vec![
                subcategory(12, 1, "Copiers"),
                subcategory(11, 1, "Printers"),
                subcategory(21, 2, "Desks"),
            ],
            locations: vec![Location {
                id: LocationId::new(3),
                name: "Warehouse B".to_string(),
            }],
        })
        .unwrap()
    }

    #[test]
    fn test_lookups() {
        let master = sample();
        assert_eq!(
            master.category(CategoryId::new(2)).unwrap().name,
            "Furniture"
        );
        assert_eq!(
            master.subcategory(SubcategoryId::new(11)).unwrap().name,
            "Printers"
        );
        assert!(master.category(CategoryId::new(9)).is_none());
        assert_eq!(master.categories().count(), 2);
        assert_eq!(master.locations().count(), 1);
    }

    #[test]
    fn test_subcategories_of_sorted_by_id() {
        let master = sample();
        let names: Vec<&str> = master
            .subcategories_of(CategoryId::new(1))
            .into_iter()
            .map(|sub| sub.name.as_str())
            .collect();
        assert_eq!(names, vec!["Printers", "Copiers"]);
        assert!(master.subcategories_of(CategoryId::new(99)).is_empty());
    }

    #[test]
    fn test_location_label() {
        let master = sample();
        assert_eq!(master.location_label(None), LOCATION_UNSET);
        assert_eq!(
            master.location_label(Some(LocationId::new(3))),
            "Warehouse B"
        );
        assert_eq!(
            master.location_label(Some(LocationId::new(4))),
            LOCATION_UNKNOWN
        );
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let err = MasterData::new(MasterRecords {
            categories: vec![category(1, "A"), category(1, "B")],
            ..MasterRecords::default()
        })
        .unwrap_err();
        assert_eq!(err, MasterError::DuplicateCategory(CategoryId::new(1)));
    }

    #[test]
    fn test_orphan_subcategory_rejected() {
        let err = MasterData::new(MasterRecords {
            categories: vec![category(1, "A")],
            subcategories: vec![subcategory(5, 7, "Lost")],
            ..MasterRecords::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            MasterError::OrphanSubcategory {
                subcategory: SubcategoryId::new(5),
                category: CategoryId::new(7),
            }
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{
            "categories": [{"id": 1, "name": "Office machines", "useful_life_years": 5}],
            "subcategories": [{"id": 11, "category_id": 1, "name": "Printers"}],
            "locations": [{"id": 3, "name": "Warehouse B"}]
        }"#;
        let master: MasterData = serde_json::from_str(json).unwrap();
        assert_eq!(
            master.category(CategoryId::new(1)).unwrap().useful_life_years,
            Some(5)
        );

        let orphan = r#"{"subcategories": [{"id": 11, "category_id": 1, "name": "Printers"}]}"#;
        assert!(serde_json::from_str::<MasterData>(orphan).is_err());
    }
}
