//! Daily tick over the pharmacy's drugs.

use serde::Serialize;

use crate::drug::Drug;

/// The pharmacy's shelf: an ordered collection of drugs advanced one day at a
/// time.
///
/// The pharmacy dispatches only through each drug's bound rule and its
/// variant's `expires()` flag; it never looks at names. It holds no state
/// besides the drugs themselves, so every call to [`Pharmacy::advance_day`]
/// applies exactly one day of change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pharmacy {
    drugs: Vec<Drug>,
}

impl Pharmacy {
    pub fn new(drugs: Vec<Drug>) -> Self {
        Self { drugs }
    }

    pub fn drugs(&self) -> &[Drug] {
        &self.drugs
    }

    pub fn into_drugs(self) -> Vec<Drug> {
        self.drugs
    }

    /// Advance every drug by one day and return the shelf in its new state.
    ///
    /// Drugs are aged in order, each through [`Drug::age_one_day`].
    pub fn advance_day(&mut self) -> &[Drug] {
        let _span = tracing::debug_span!("advance_day", drugs = self.drugs.len()).entered();

        for drug in &mut self.drugs {
            let delta = drug.age_one_day();

            tracing::debug!(
                name = drug.name(),
                expires_in = %drug.expires_in(),
                benefit = drug.benefit().value(),
                delta,
                "drug aged one day"
            );
        }

        &self.drugs
    }

    /// Owned copy of the current shelf.
    pub fn snapshot(&self) -> Vec<Drug> {
        self.drugs.clone()
    }

    /// Advance `days` times, returning the snapshot taken after each day.
    pub fn simulate(&mut self, days: u32) -> Vec<Vec<Drug>> {
        let mut log = Vec::with_capacity(days as usize);
        for day in 1..=days {
            let _span = tracing::info_span!("day", day).entered();
            log.push(self.advance_day().to_vec());
        }
        tracing::info!(days, drugs = self.drugs.len(), "simulation finished");
        log
    }
}

impl FromIterator<Drug> for Pharmacy {
    fn from_iter<I: IntoIterator<Item = Drug>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
