//! Master data error types.

use assetbook_shared::AppError;
use assetbook_shared::types::{CategoryId, LocationId, SubcategoryId};
use thiserror::Error;

/// Inconsistencies found while indexing master data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MasterError {
    /// Two categories share an ID.
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(CategoryId),

    /// Two subcategories share an ID.
    #[error("Duplicate subcategory id: {0}")]
    DuplicateSubcategory(SubcategoryId),

    /// Two locations share an ID.
    #[error("Duplicate location id: {0}")]
    DuplicateLocation(LocationId),

    /// A subcategory points at a category that does not exist.
    #[error("Subcategory {subcategory} references missing category {category}")]
    OrphanSubcategory {
        /// Offending subcategory.
        subcategory: SubcategoryId,
        /// Missing category.
        category: CategoryId,
    },
}

impl From<MasterError> for AppError {
    fn from(err: MasterError) -> Self {
        Self::Validation(err.to_string())
    }
}
