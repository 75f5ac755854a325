use std::path::Path;

use fostering_completion::{CompletionRules, DEFAULT_ADDRESS_HISTORY_YEARS};
use fostering_protocol::Workflow;
use serde::{Deserialize, Serialize};

use crate::{GatewayError, Result};

pub const DEFAULT_HOME_VISIT_FORM: &str = "fostering_home_visit";
pub const DEFAULT_APPLICATION_FORM: &str = "fostering_application";

/// Gateway settings, read from TOML. Missing keys take their defaults.
///
/// ```toml
/// home_visit_form = "fostering_home_visit"
/// application_form = "fostering_application"
/// address_history_years = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Integration form written by the home-visit workflow
    pub home_visit_form: String,

    /// Integration form written by the application workflow
    pub application_form: String,

    /// Years of address history an applicant must account for
    pub address_history_years: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            home_visit_form: DEFAULT_HOME_VISIT_FORM.to_string(),
            application_form: DEFAULT_APPLICATION_FORM.to_string(),
            address_history_years: DEFAULT_ADDRESS_HISTORY_YEARS,
        }
    }
}

impl GatewayConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&raw)
            .map_err(|err| GatewayError::Config(format!("{}: {err}", path.display())))?;
        log::debug!("Loaded gateway config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|err| GatewayError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.home_visit_form.trim().is_empty() {
            return Err(GatewayError::Config(
                "home_visit_form must not be empty".to_string(),
            ));
        }
        if self.application_form.trim().is_empty() {
            return Err(GatewayError::Config(
                "application_form must not be empty".to_string(),
            ));
        }
        self.completion_rules()
            .validate()
            .map_err(|err| GatewayError::Config(err.to_string()))
    }

    /// Integration form the given workflow writes through.
    pub fn form_for(&self, workflow: Workflow) -> &str {
        match workflow {
            Workflow::HomeVisit => &self.home_visit_form,
            Workflow::Application => &self.application_form,
        }
    }

    pub fn completion_rules(&self) -> CompletionRules {
        CompletionRules {
            address_history_years: self.address_history_years,
        }
    }
}
