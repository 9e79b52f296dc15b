//! Update rule set: one pure delta function per drug variant.
//!
//! A rule looks at a drug's benefit and its expiry countdown for the day being
//! entered and returns how much the benefit moves. Rules never overshoot:
//! when a full step would cross `0` or `Benefit::MAX`, they return the partial
//! step that lands exactly on the bound.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use apothecary_core::{Benefit, DomainError, Expiry};

/// Signature shared by every rule.
pub type UpdateRule = fn(Benefit, Expiry) -> i32;

/// Days left at which surge drugs gain 2 per day.
pub const SURGE_DOUBLE_WITHIN: i32 = 10;
/// Days left at which surge drugs gain 3 per day.
pub const SURGE_TRIPLE_WITHIN: i32 = 5;

/// Loses 1 per day, 2 once expired.
pub fn standard(benefit: Benefit, expiry: Expiry) -> i32 {
    decay(benefit, expiry, 1)
}

/// Gains 1 per day, 2 once expired.
pub fn slow_decay(benefit: Benefit, expiry: Expiry) -> i32 {
    if benefit.is_ceiling() {
        return 0;
    }
    let step = if expiry.is_past() { 2 } else { 1 };
    step.min(benefit.headroom())
}

/// Never moves.
pub fn fixed(_benefit: Benefit, _expiry: Expiry) -> i32 {
    0
}

/// Gains faster as expiry approaches, then drops to zero once expired.
pub fn surge(benefit: Benefit, expiry: Expiry) -> i32 {
    if expiry.is_past() {
        return -benefit.value();
    }
    let step = if expiry.within(SURGE_TRIPLE_WITHIN) {
        3
    } else if expiry.within(SURGE_DOUBLE_WITHIN) {
        2
    } else {
        1
    };
    step.min(benefit.headroom())
}

/// Loses 2 per day, 4 once expired.
pub fn fast_decay(benefit: Benefit, expiry: Expiry) -> i32 {
    decay(benefit, expiry, 2)
}

fn decay(benefit: Benefit, expiry: Expiry, rate: i32) -> i32 {
    if benefit.is_floor() {
        return 0;
    }
    let step = if expiry.is_past() { rate * 2 } else { rate };
    -(step.min(benefit.value()))
}

/// The closed set of drug behaviours.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Standard,
    SlowDecay,
    Fixed,
    Surge,
    FastDecay,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Standard,
        Variant::SlowDecay,
        Variant::Fixed,
        Variant::Surge,
        Variant::FastDecay,
    ];

    /// The rule bound to this variant.
    pub fn rule(self) -> UpdateRule {
        match self {
            Variant::Standard => standard,
            Variant::SlowDecay => slow_decay,
            Variant::Fixed => fixed,
            Variant::Surge => surge,
            Variant::FastDecay => fast_decay,
        }
    }

    /// Whether drugs of this variant count down towards expiry.
    pub fn expires(self) -> bool {
        !matches!(self, Variant::Fixed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::SlowDecay => "slow-decay",
            Variant::Fixed => "fixed",
            Variant::Surge => "surge",
            Variant::FastDecay => "fast-decay",
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::unknown_variant(s))
    }
}
