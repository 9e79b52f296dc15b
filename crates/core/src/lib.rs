//! `apothecary-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod benefit;
pub mod error;
pub mod expiry;

pub use benefit::Benefit;
pub use error::{DomainError, DomainResult};
pub use expiry::Expiry;
