//! Pharmacy trial: stock the shelf, advance it day by day, persist each day.

pub mod config;
pub mod trial;

pub use config::TrialConfig;
pub use trial::{render_log, run, starting_drugs};
