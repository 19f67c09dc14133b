#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "car-workshop")]
#[command(about = "Buy a car from the catalog, drive it, diagnose and repair it")]
pub struct CliConfig {
    #[arg(long, help = "TOML scenario file; the built-in showroom run is used when omitted")]
    pub scenario: Option<PathBuf>,

    #[arg(long, value_enum, help = "Print a final report in the given format")]
    pub report: Option<cli::ReportFormat>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
