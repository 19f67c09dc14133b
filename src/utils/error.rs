use crate::domain::model::BodyStyle;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkshopError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Scenario parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("No car in the catalog has body style {body_style}")]
    NoMatchingCar { body_style: BodyStyle },
}

impl WorkshopError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            WorkshopError::IoError(_) => "Check that the scenario file exists and is readable",
            WorkshopError::SerializationError(_) => "Retry without --report json",
            WorkshopError::ConfigParseError(_) => "Check the scenario file for TOML syntax errors",
            WorkshopError::InvalidConfigValueError { .. }
            | WorkshopError::MissingConfigError { .. } => "Fix the reported field in the scenario file",
            WorkshopError::NoMatchingCar { .. } => {
                "Add a car with the wanted body style or change purchase.body_style"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkshopError>;
