//! A drug instance on the pharmacy shelf.

use serde::Serialize;

use apothecary_core::{Benefit, DomainError, DomainResult, Expiry};

use crate::catalog::{self, CatalogEntry};
use crate::rules::{UpdateRule, Variant};

/// A specific instance of a drug available for sale.
///
/// Construction validates every field; afterwards only the pharmacy's daily
/// tick changes the expiry countdown and benefit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Drug {
    name: String,
    expires_in: Expiry,
    benefit: Benefit,
    variant: Variant,
}

impl Drug {
    pub fn new(
        name: impl Into<String>,
        expires_in: impl Into<Expiry>,
        benefit: i64,
        variant: Variant,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }

        let benefit = Benefit::new(benefit)?;

        Ok(Self {
            name,
            expires_in: expires_in.into(),
            benefit,
            variant,
        })
    }

    /// Build a named catalog drug, e.g. `Drug::from_catalog("Fervex", 5, 40)`.
    pub fn from_catalog(
        name: &str,
        expires_in: impl Into<Expiry>,
        benefit: i64,
    ) -> DomainResult<Self> {
        let entry = catalog::lookup(name)?;
        Self::from_entry(entry, expires_in, benefit)
    }

    pub fn from_entry(
        entry: CatalogEntry,
        expires_in: impl Into<Expiry>,
        benefit: i64,
    ) -> DomainResult<Self> {
        Self::new(entry.name, expires_in, benefit, entry.variant)
    }

    pub fn doliprane(expires_in: impl Into<Expiry>, benefit: i64) -> DomainResult<Self> {
        Self::from_entry(catalog::DOLIPRANE, expires_in, benefit)
    }

    pub fn herbal_tea(expires_in: impl Into<Expiry>, benefit: i64) -> DomainResult<Self> {
        Self::from_entry(catalog::HERBAL_TEA, expires_in, benefit)
    }

    pub fn fervex(expires_in: impl Into<Expiry>, benefit: i64) -> DomainResult<Self> {
        Self::from_entry(catalog::FERVEX, expires_in, benefit)
    }

    pub fn magic_pill(expires_in: impl Into<Expiry>, benefit: i64) -> DomainResult<Self> {
        Self::from_entry(catalog::MAGIC_PILL, expires_in, benefit)
    }

    pub fn dafalgan(expires_in: impl Into<Expiry>, benefit: i64) -> DomainResult<Self> {
        Self::from_entry(catalog::DAFALGAN, expires_in, benefit)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expires_in(&self) -> Expiry {
        self.expires_in
    }

    pub fn benefit(&self) -> Benefit {
        self.benefit
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn rule(&self) -> UpdateRule {
        self.variant.rule()
    }

    /// Age this drug by one day and return the benefit delta that was applied.
    ///
    /// The countdown first moves to the day being entered (unless the variant
    /// does not expire), then the bound rule computes the delta from that
    /// state.
    pub fn age_one_day(&mut self) -> i32 {
        if self.variant.expires() {
            self.expires_in = self.expires_in.next_day();
        }
        let delta = (self.rule())(self.benefit, self.expires_in);
        self.benefit = self.benefit.saturating_add(delta);
        delta
    }
}
