//! Named drugs sold by the pharmacy, each bound to a variant.

use apothecary_core::{DomainError, DomainResult};

use crate::rules::Variant;

/// One named product in the catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub variant: Variant,
}

pub const DOLIPRANE: CatalogEntry = CatalogEntry {
    name: "Doliprane",
    variant: Variant::Standard,
};

pub const HERBAL_TEA: CatalogEntry = CatalogEntry {
    name: "Herbal Tea",
    variant: Variant::SlowDecay,
};

pub const FERVEX: CatalogEntry = CatalogEntry {
    name: "Fervex",
    variant: Variant::Surge,
};

pub const MAGIC_PILL: CatalogEntry = CatalogEntry {
    name: "Magic Pill",
    variant: Variant::Fixed,
};

pub const DAFALGAN: CatalogEntry = CatalogEntry {
    name: "Dafalgan",
    variant: Variant::FastDecay,
};

pub const CATALOG: [CatalogEntry; 5] = [DOLIPRANE, HERBAL_TEA, FERVEX, MAGIC_PILL, DAFALGAN];

/// Find a catalog entry by display name (case-insensitive).
pub fn lookup(name: &str) -> DomainResult<CatalogEntry> {
    let wanted = name.trim();
    CATALOG
        .into_iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| DomainError::unknown_drug(name))
}
