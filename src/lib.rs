pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleSink, MemorySink};
pub use config::toml_config::ScenarioConfig;
pub use self::core::{
    car::Car,
    catalog::Catalog,
    facade::CarFacade,
    scenario::{ScenarioEngine, ScenarioReport},
};
pub use domain::model::{BodyStyle, DamageCategory, DriveAction, Manufacturer, Part, SharedPart};
pub use utils::error::{Result, WorkshopError};
