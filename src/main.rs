use anyhow::Context;
use car_workshop::config::cli::ReportFormat;
use car_workshop::utils::logger;
use car_workshop::{CliConfig, ConsoleSink, ScenarioEngine, WorkshopError};
use clap::Parser;
use std::rc::Rc;

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let scenario = config
        .load_scenario()
        .context("Failed to load scenario")?;

    let console = ConsoleSink::new();
    let engine = ScenarioEngine::new(scenario, Rc::new(console));
    let report = engine.run().context("Scenario run failed")?;

    if let Some(ReportFormat::Json) = config.report {
        report.write_json(&console)?;
    }

    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        for line in failure_lines(&e) {
            eprintln!("{}", line);
        }
        std::process::exit(1);
    }
}

/// User-facing stderr lines for a failed run. Tracing stays out of this path.
fn failure_lines(e: &anyhow::Error) -> Vec<String> {
    let mut lines = vec![format!("❌ {:#}", e)];
    if let Some(workshop_error) = e.downcast_ref::<WorkshopError>() {
        lines.push(format!("💡 Suggestion: {}", workshop_error.recovery_suggestion()));
    }
    lines
}
