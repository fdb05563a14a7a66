//! Master data: categories, subcategories, locations.
//!
//! Read-only lookup tables supplied by the caller. Maintaining them is
//! somebody else's job; this module only indexes and queries them.

pub mod data;
pub mod error;
pub mod types;

pub use data::{LOCATION_UNKNOWN, LOCATION_UNSET, MasterData, MasterRecords};
pub use error::MasterError;
pub use types::{Category, Location, Subcategory};
