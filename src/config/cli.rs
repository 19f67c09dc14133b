use crate::config::toml_config::ScenarioConfig;
use crate::config::CliConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
}

impl CliConfig {
    /// Loads and validates the scenario named on the command line, or the built-in one.
    pub fn load_scenario(&self) -> Result<ScenarioConfig> {
        let scenario = match &self.scenario {
            Some(path) => {
                tracing::debug!("loading scenario from {}", path.display());
                ScenarioConfig::from_file(path)?
            }
            None => ScenarioConfig::default_demo(),
        };
        scenario.validate()?;
        Ok(scenario)
    }
}
