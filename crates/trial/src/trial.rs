//! Trial run: the collaborator that drives the pharmacy once per day.

use std::fs;

use anyhow::Context;

use apothecary_core::DomainResult;
use apothecary_inventory::{Drug, Pharmacy};

use crate::config::TrialConfig;

/// The shelf the trial starts from.
pub fn starting_drugs() -> DomainResult<Vec<Drug>> {
    Ok(vec![
        Drug::doliprane(20, 30)?,
        Drug::herbal_tea(10, 5)?,
        Drug::fervex(5, 40)?,
        Drug::magic_pill(15, 40)?,
        Drug::dafalgan(20, 50)?,
    ])
}

/// Render one compact JSON array per day, one day per line.
pub fn render_log(log: &[Vec<Drug>]) -> serde_json::Result<String> {
    let days = log
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("[\n\t{}\n]", days.join(",\n\t")))
}

/// Run the trial and write the snapshots to `config.output`.
pub fn run(config: &TrialConfig) -> anyhow::Result<Vec<Vec<Drug>>> {
    let mut pharmacy = Pharmacy::new(starting_drugs()?);
    tracing::info!(
        days = config.days,
        drugs = pharmacy.drugs().len(),
        "starting trial"
    );

    let log = pharmacy.simulate(config.days);

    let rendered = render_log(&log).context("failed to serialize trial log")?;
    fs::write(&config.output, rendered)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    tracing::info!(output = %config.output.display(), "trial log written");
    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_drugs_cover_the_catalog() {
        let drugs = starting_drugs().unwrap();
        let names: Vec<_> = drugs.iter().map(Drug::name).collect();
        assert_eq!(
            names,
            vec!["Doliprane", "Herbal Tea", "Fervex", "Magic Pill", "Dafalgan"]
        );
    }

    #[test]
    fn render_log_puts_one_day_per_line() {
        let mut pharmacy = Pharmacy::new(vec![Drug::doliprane(2, 3).unwrap()]);
        let log = pharmacy.simulate(2);

        let rendered = render_log(&log).unwrap();
        assert_eq!(
            rendered,
            "[\n\t[{\"name\":\"Doliprane\",\"expiresIn\":1,\"benefit\":2,\"variant\":\"standard\"}],\n\t\
             [{\"name\":\"Doliprane\",\"expiresIn\":0,\"benefit\":1,\"variant\":\"standard\"}]\n]"
        );
    }

    #[test]
    fn rendered_log_is_valid_json() {
        let mut pharmacy = Pharmacy::new(starting_drugs().unwrap());
        let rendered = render_log(&pharmacy.simulate(3)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 3);
    }
}
