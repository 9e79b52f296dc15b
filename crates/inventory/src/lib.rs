//! Pharmacy inventory domain module.
//!
//! This crate contains the drug aging rules and the daily tick, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod catalog;
pub mod drug;
pub mod pharmacy;
pub mod rules;

pub use catalog::{CATALOG, CatalogEntry};
pub use drug::Drug;
pub use pharmacy::Pharmacy;
pub use rules::{UpdateRule, Variant};
