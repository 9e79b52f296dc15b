//! Expiry countdown.

use serde::{Deserialize, Serialize};

/// Days remaining before a drug expires.
///
/// Negative day counts are meaningful: the drug is past its expiry date.
/// `Never` is an unbounded countdown: it is never past, never within any
/// threshold, and stays `Never` from one day to the next. It serialises as
/// `null`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i32>", into = "Option<i32>")]
pub enum Expiry {
    Days(i32),
    Never,
}

impl Expiry {
    pub fn days(self) -> Option<i32> {
        match self {
            Expiry::Days(d) => Some(d),
            Expiry::Never => None,
        }
    }

    /// Strictly past the expiry date.
    pub fn is_past(self) -> bool {
        matches!(self, Expiry::Days(d) if d < 0)
    }

    /// True while at most `threshold` days remain (and the drug can expire).
    pub fn within(self, threshold: i32) -> bool {
        matches!(self, Expiry::Days(d) if d <= threshold)
    }

    /// The countdown one day later. `Never` stays `Never`.
    pub fn next_day(self) -> Self {
        match self {
            Expiry::Days(d) => Expiry::Days(d.saturating_sub(1)),
            Expiry::Never => Expiry::Never,
        }
    }
}

impl From<Option<i32>> for Expiry {
    fn from(value: Option<i32>) -> Self {
        value.map_or(Expiry::Never, Expiry::Days)
    }
}

impl From<Expiry> for Option<i32> {
    fn from(value: Expiry) -> Self {
        value.days()
    }
}

impl From<i32> for Expiry {
    fn from(value: i32) -> Self {
        Expiry::Days(value)
    }
}

impl core::fmt::Display for Expiry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Expiry::Days(d) => write!(f, "{d}"),
            Expiry::Never => f.write_str("never"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_days_is_not_yet_past() {
        assert!(!Expiry::Days(0).is_past());
        assert!(Expiry::Days(-1).is_past());
        assert!(!Expiry::Never.is_past());
    }

    #[test]
    fn within_ignores_unbounded_expiry() {
        assert!(Expiry::Days(5).within(5));
        assert!(!Expiry::Days(6).within(5));
        assert!(!Expiry::Never.within(i32::MAX));
    }

    #[test]
    fn next_day_counts_down_and_saturates() {
        assert_eq!(Expiry::Days(1).next_day(), Expiry::Days(0));
        assert_eq!(Expiry::Days(0).next_day(), Expiry::Days(-1));
        assert_eq!(Expiry::Days(i32::MIN).next_day(), Expiry::Days(i32::MIN));
        assert_eq!(Expiry::Never.next_day(), Expiry::Never);
    }

    #[test]
    fn never_round_trips_through_null() {
        assert_eq!(serde_json::to_string(&Expiry::Never).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Expiry::Days(-4)).unwrap(), "-4");
        assert_eq!(serde_json::from_str::<Expiry>("null").unwrap(), Expiry::Never);
        assert_eq!(serde_json::from_str::<Expiry>("12").unwrap(), Expiry::Days(12));
    }
}
