//! Core business logic for Assetbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Equipment records and master data arrive from the caller; everything here is
//! a calculation over them.
//!
//! # Modules
//!
//! - `depreciation` - Straight-line depreciation engine
//! - `lifespan` - Useful-life resolution with fallback precedence
//! - `master` - Category, subcategory and location lookup tables
//! - `registry` - Equipment records, listing rows and registration drafts

pub mod depreciation;
pub mod lifespan;
pub mod master;
pub mod registry;
