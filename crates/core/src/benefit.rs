//! Bounded benefit value.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// How powerful a drug is, always within `0..=Benefit::MAX`.
///
/// The only way to obtain a `Benefit` is through [`Benefit::new`] (or
/// deserialisation, which goes through the same check), so holding one is
/// proof the bounds were enforced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Benefit(i32);

impl Benefit {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 50;

    pub const ZERO: Self = Self(Self::MIN);
    pub const CEILING: Self = Self(Self::MAX);

    pub fn new(value: i64) -> DomainResult<Self> {
        if value < i64::from(Self::MIN) {
            return Err(DomainError::BenefitBelowMinimum { value });
        }
        if value > i64::from(Self::MAX) {
            return Err(DomainError::BenefitAboveMaximum {
                value,
                max: i64::from(Self::MAX),
            });
        }
        // In range, so the narrowing cannot truncate.
        Ok(Self(value as i32))
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Room left before the ceiling.
    pub fn headroom(self) -> i32 {
        Self::MAX - self.0
    }

    /// Apply a signed delta, pinning the result to the bounds.
    pub fn saturating_add(self, delta: i32) -> Self {
        Self(self.0.saturating_add(delta).clamp(Self::MIN, Self::MAX))
    }

    pub fn is_floor(self) -> bool {
        self.0 == Self::MIN
    }

    pub fn is_ceiling(self) -> bool {
        self.0 == Self::MAX
    }
}

impl TryFrom<i64> for Benefit {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Benefit> for i64 {
    fn from(value: Benefit) -> Self {
        i64::from(value.0)
    }
}

impl core::fmt::Display for Benefit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
