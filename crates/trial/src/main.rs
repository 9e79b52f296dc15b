use apothecary_trial::TrialConfig;

fn main() -> anyhow::Result<()> {
    apothecary_observability::init();

    let config = TrialConfig::from_env()?;

    match apothecary_trial::run(&config) {
        Ok(_) => {
            tracing::info!("success");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "trial failed");
            Err(err)
        }
    }
}
