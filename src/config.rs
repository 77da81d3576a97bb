/// Scenario configuration module
/// Loads business parameters and run settings from a JSON file

use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::error::{SimError, SimResult};
use crate::models::BusinessParams;

pub const DEFAULT_NUM_TRIALS: usize = 1_000;

/// A scenario file: parameters plus run settings
/// Missing fields fall back to the defaults
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub params: BusinessParams,
    pub num_trials: usize,
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            params: BusinessParams::default(),
            num_trials: DEFAULT_NUM_TRIALS,
            seed: None,
        }
    }
}

impl ScenarioConfig {
    pub fn from_json(text: &str) -> SimResult<Self> {
        let config: ScenarioConfig = serde_json::from_str(text)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> SimResult<Self> {
        log::info!("loading scenario from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

impl BusinessParams {
    /// Check that every monetary and demand field is finite and non-negative
    pub fn validate(&self) -> SimResult<()> {
        let fields = [
            ("units_base", self.units_base),
            ("units_std", self.units_std),
            ("price_per_unit", self.price_per_unit),
            ("subscription_rate", self.subscription_rate),
            ("addon_rate", self.addon_rate),
            ("fixed_costs", self.fixed_costs),
            ("variable_cost_per_unit", self.variable_cost_per_unit),
            ("non_recurring_costs", self.non_recurring_costs),
            ("employee_salary", self.employee_salary),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidParameter { field, value });
            }
        }

        Ok(())
    }
}
