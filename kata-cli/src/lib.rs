pub mod report;

use kata_domain::{sample, Company};
use kata_store::{load_company, Config};

/// Load the configured fixture, or the sample company when none is set
pub fn load(config: &Config) -> anyhow::Result<Company> {
    match &config.company.fixture_path {
        Some(path) => Ok(load_company(path)?),
        None => {
            tracing::info!("No fixture configured, using the sample company");
            Ok(sample::company()?)
        }
    }
}
