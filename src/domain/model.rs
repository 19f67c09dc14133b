use crate::domain::ports::OutputSink;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub const MAX_CONDITION: u8 = 100;
pub const REPAIR_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageCategory {
    Tires,
    Suspension,
    Engine,
}

impl DamageCategory {
    pub fn label(self) -> &'static str {
        match self {
            DamageCategory::Tires => "Tires",
            DamageCategory::Suspension => "Suspension",
            DamageCategory::Engine => "Engine",
        }
    }
}

impl fmt::Display for DamageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyStyle {
    Cabriolet,
    Hatchback,
    Sedan,
}

impl fmt::Display for BodyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyStyle::Cabriolet => "Cabriolet",
            BodyStyle::Hatchback => "Hatchback",
            BodyStyle::Sedan => "Sedan",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Manufacturer {
    Ford,
    Fiat,
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Manufacturer::Ford => f.write_str("Ford"),
            Manufacturer::Fiat => f.write_str("Fiat"),
        }
    }
}

/// One step of a scripted drive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DriveAction {
    Accelerate,
    Brake,
    ChangeGear,
    Steer { angle: f32 },
}

/// A repairable car component. Condition stays within `0..=MAX_CONDITION`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    category: DamageCategory,
    condition: u8,
}

/// Parts are shared between the damage handler and the diagnostic service of one car.
pub type SharedPart = Rc<RefCell<Part>>;

impl Part {
    pub fn new(category: DamageCategory) -> Self {
        Self {
            category,
            condition: MAX_CONDITION,
        }
    }

    pub fn shared(category: DamageCategory) -> SharedPart {
        Rc::new(RefCell::new(Self::new(category)))
    }

    pub fn category(&self) -> DamageCategory {
        self.category
    }

    pub fn condition(&self) -> u8 {
        self.condition
    }

    pub fn needs_repair(&self) -> bool {
        self.condition < REPAIR_THRESHOLD
    }

    pub fn damage(&mut self, amount: u32, sink: &dyn OutputSink) {
        let amount_clamped = amount.min(u32::from(MAX_CONDITION)) as u8;
        self.condition = self.condition.saturating_sub(amount_clamped);
        sink.line(&format!("Damage {}: {}", self.category.label(), amount));
        tracing::debug!(
            category = %self.category,
            amount,
            condition = self.condition,
            "part damaged"
        );
    }

    pub fn repair(&mut self, sink: &dyn OutputSink) {
        self.condition = MAX_CONDITION;
        sink.line(&format!("Repair {}", self.category.label()));
        tracing::debug!(category = %self.category, "part repaired");
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartStatus {
    pub category: DamageCategory,
    pub condition: u8,
    pub needs_repair: bool,
}

impl From<&Part> for PartStatus {
    fn from(part: &Part) -> Self {
        Self {
            category: part.category(),
            condition: part.condition(),
            needs_repair: part.needs_repair(),
        }
    }
}
