//! Equipment registry: records, listing rows, registration drafts.

pub mod draft;
pub mod listing;
pub mod snapshot;
pub mod types;

pub use draft::{DateParts, DraftError, EquipmentDraft};
pub use listing::RegistryListing;
pub use snapshot::RegistrySnapshot;
pub use types::{CurrencyTotal, Equipment, EquipmentRow, ListingSummary};
