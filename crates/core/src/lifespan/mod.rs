//! Useful-life resolution.

pub mod resolver;

pub use resolver::{LifespanResolver, LifespanSource, ResolvedLifespan, UsefulLifeTable};
