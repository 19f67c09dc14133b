use crate::domain::model::{BodyStyle, DriveAction, Manufacturer};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_finite, validate_non_empty_list, validate_non_empty_string, Validate,
};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: Option<String>,
    pub cars: Vec<CarConfig>,
    pub purchase: PurchaseConfig,
    #[serde(default)]
    pub drive: Vec<DriveAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarConfig {
    pub manufacturer: Manufacturer,
    pub model: String,
    pub body_style: BodyStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseConfig {
    pub body_style: BodyStyle,
    pub buyer: String,
}

impl ScenarioConfig {
    /// The classic showroom run: two cars, a hatchback bought and driven.
    pub fn default_demo() -> Self {
        Self {
            name: Some("showroom".to_string()),
            cars: vec![
                CarConfig {
                    manufacturer: Manufacturer::Ford,
                    model: "Ford Fusion".to_string(),
                    body_style: BodyStyle::Sedan,
                },
                CarConfig {
                    manufacturer: Manufacturer::Fiat,
                    model: "Fiat Stilo 2.4".to_string(),
                    body_style: BodyStyle::Hatchback,
                },
            ],
            purchase: PurchaseConfig {
                body_style: BodyStyle::Hatchback,
                buyer: "Dimon".to_string(),
            },
            drive: vec![DriveAction::Accelerate, DriveAction::Brake],
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${NAME}` with the environment variable; unknown names are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("cars", &self.cars)?;
        for (index, car) in self.cars.iter().enumerate() {
            validate_non_empty_string(&format!("cars[{}].model", index), &car.model)?;
        }

        validate_non_empty_string("purchase.buyer", &self.purchase.buyer)?;

        for (index, action) in self.drive.iter().enumerate() {
            if let DriveAction::Steer { angle } = action {
                validate_finite(&format!("drive[{}].angle", index), *angle)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::WorkshopError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SCENARIO: &str = r#"
name = "weekend"

[[cars]]
manufacturer = "ford"
model = "Ford Fusion"
body_style = "sedan"

[[cars]]
manufacturer = "fiat"
model = "Fiat Stilo 2.4"
body_style = "hatchback"

[purchase]
body_style = "sedan"
buyer = "Alex"

[[drive]]
action = "accelerate"

[[drive]]
action = "steer"
angle = 15.0

[[drive]]
action = "change_gear"
"#;

    #[test]
    fn test_parse_scenario() {
        let config = ScenarioConfig::from_toml_str(SCENARIO).unwrap();

        assert_eq!(config.name.as_deref(), Some("weekend"));
        assert_eq!(config.cars.len(), 2);
        assert_eq!(config.cars[1].manufacturer, Manufacturer::Fiat);
        assert_eq!(config.purchase.body_style, BodyStyle::Sedan);
        assert_eq!(
            config.drive,
            vec![
                DriveAction::Accelerate,
                DriveAction::Steer { angle: 15.0 },
                DriveAction::ChangeGear
            ]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_drive_defaults_to_empty() {
        let config = ScenarioConfig::from_toml_str(
            r#"
[[cars]]
manufacturer = "ford"
model = "Ford Ka"
body_style = "cabriolet"

[purchase]
body_style = "cabriolet"
buyer = "Sam"
"#,
        )
        .unwrap();
        assert!(config.drive.is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CAR_WORKSHOP_TEST_BUYER", "Robin");
        let content = SCENARIO.replace("\"Alex\"", "\"${CAR_WORKSHOP_TEST_BUYER}\"");

        let config = ScenarioConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.purchase.buyer, "Robin");

        std::env::remove_var("CAR_WORKSHOP_TEST_BUYER");
    }

    #[test]
    fn test_unknown_env_var_is_left_in_place() {
        let content = SCENARIO.replace("\"Alex\"", "\"${CAR_WORKSHOP_UNSET_VARIABLE}\"");
        let config = ScenarioConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.purchase.buyer, "${CAR_WORKSHOP_UNSET_VARIABLE}");
    }

    #[test]
    fn test_unknown_body_style_is_a_parse_error() {
        let content = SCENARIO.replace("body_style = \"sedan\"\nbuyer", "body_style = \"pickup\"\nbuyer");
        let err = ScenarioConfig::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, WorkshopError::ConfigParseError(_)));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ScenarioConfig::default_demo();
        config.purchase.buyer = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = ScenarioConfig::default_demo();
        config.cars.clear();
        assert!(matches!(
            config.validate(),
            Err(WorkshopError::MissingConfigError { .. })
        ));

        let mut config = ScenarioConfig::default_demo();
        config.drive.push(DriveAction::Steer { angle: f32::NAN });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_large_finite_steer_angle_is_accepted() {
        let mut config = ScenarioConfig::default_demo();
        config.drive.push(DriveAction::Steer { angle: 720.0 });
        config.drive.push(DriveAction::Steer { angle: -1080.5 });
        assert!(config.validate().is_ok());

        config.drive.push(DriveAction::Steer {
            angle: f32::NEG_INFINITY,
        });
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            WorkshopError::InvalidConfigValueError { field, .. } if field == "drive[4].angle"
        ));
    }

    #[test]
    fn test_default_demo_is_valid() {
        assert!(ScenarioConfig::default_demo().validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SCENARIO.as_bytes()).unwrap();

        let config = ScenarioConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.purchase.buyer, "Alex");
    }
}
