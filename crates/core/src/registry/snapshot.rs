//! Registry snapshot: master data plus equipment records in one document.

use std::collections::HashSet;

use assetbook_shared::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use super::types::Equipment;
use crate::master::MasterData;

/// Everything a listing needs, as handed over by the storage side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Master data tables.
    #[serde(default)]
    pub master: MasterData,
    /// Equipment records, in listing order.
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

impl RegistrySnapshot {
    /// Parses a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Input` for malformed JSON or inconsistent master
    /// data, and `AppError::Validation` for duplicate equipment IDs.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| AppError::Input(e.to_string()))?;

        let mut seen = HashSet::with_capacity(snapshot.equipment.len());
        if let Some(duplicate) = snapshot.equipment.iter().find(|e| !seen.insert(e.id)) {
            return Err(AppError::Validation(format!(
                "Duplicate equipment id: {}",
                duplicate.id
            )));
        }

        Ok(snapshot)
    }
}
