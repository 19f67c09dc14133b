use crate::config::toml_config::ScenarioConfig;
use crate::core::car::Car;
use crate::core::catalog::Catalog;
use crate::domain::model::{BodyStyle, DamageCategory, DriveAction, Manufacturer, PartStatus};
use crate::domain::ports::OutputSink;
use crate::utils::error::{Result, WorkshopError};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: Option<String>,
    pub manufacturer: Manufacturer,
    pub model: String,
    pub body_style: BodyStyle,
    pub owner: Option<String>,
    pub repaired: Vec<DamageCategory>,
    pub parts: Vec<PartStatus>,
}

impl ScenarioReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, sink: &dyn OutputSink) -> Result<()> {
        sink.line(&self.to_json()?);
        Ok(())
    }
}

/// Runs a purchase-drive-diagnose-repair script against a fresh catalog.
pub struct ScenarioEngine {
    config: ScenarioConfig,
    sink: Rc<dyn OutputSink>,
}

impl ScenarioEngine {
    pub fn new(config: ScenarioConfig, sink: Rc<dyn OutputSink>) -> Self {
        Self { config, sink }
    }

    pub fn build_catalog(&self) -> Catalog {
        let cars = self
            .config
            .cars
            .iter()
            .map(|car| {
                Rc::new(Car::new(
                    car.manufacturer,
                    car.model.clone(),
                    car.body_style,
                    Rc::clone(&self.sink),
                ))
            })
            .collect();
        Catalog::new(cars)
    }

    pub fn run(&self) -> Result<ScenarioReport> {
        tracing::info!(
            scenario = self.config.name.as_deref().unwrap_or("unnamed"),
            cars = self.config.cars.len(),
            "starting scenario"
        );

        let catalog = self.build_catalog();
        let wanted = self.config.purchase.body_style;
        let my_car = catalog
            .filter_by_body_style(wanted)
            .into_iter()
            .next()
            .ok_or(WorkshopError::NoMatchingCar { body_style: wanted })?;

        catalog.transfer_ownership(&my_car, &self.config.purchase.buyer);

        let facade = my_car.facade();
        for action in &self.config.drive {
            match *action {
                DriveAction::Accelerate => facade.accelerate(),
                DriveAction::Brake => facade.brake(),
                DriveAction::ChangeGear => facade.change_gear(),
                DriveAction::Steer { angle } => facade.steer(angle),
            }
        }

        let parts_for_repair = facade.diagnose();
        let repaired: Vec<DamageCategory> = parts_for_repair
            .iter()
            .map(|part| part.borrow().category())
            .collect();
        facade.repair(&parts_for_repair);

        tracing::info!(model = my_car.model(), repaired = repaired.len(), "scenario finished");

        Ok(ScenarioReport {
            scenario: self.config.name.clone(),
            manufacturer: my_car.manufacturer(),
            model: my_car.model().to_string(),
            body_style: my_car.body_style(),
            owner: my_car.owner(),
            repaired,
            parts: my_car.status(),
        })
    }
}
