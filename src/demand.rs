/// Demand sampling module
/// Draws the units sold for each trial from a normal distribution

use rand::Rng;
use rand_distr::{Distribution, Normal};
use crate::error::{SimError, SimResult};
use crate::models::BusinessParams;

/// Sampler for units sold, built once per run
#[derive(Clone, Debug)]
pub struct DemandSampler {
    normal: Normal<f64>,
}

impl DemandSampler {
    /// Build the sampler from the expected units and their standard deviation
    pub fn new(params: &BusinessParams) -> SimResult<Self> {
        // Normal::new accepts a negative std dev and mirrors the distribution
        if !(params.units_std >= 0.0) || !params.units_std.is_finite() {
            return Err(SimError::InvalidDemand {
                mean: params.units_base,
                std_dev: params.units_std,
                reason: "standard deviation must be finite and non-negative".to_string(),
            });
        }

        let normal = Normal::new(params.units_base, params.units_std).map_err(|e| {
            SimError::InvalidDemand {
                mean: params.units_base,
                std_dev: params.units_std,
                reason: e.to_string(),
            }
        })?;

        Ok(DemandSampler { normal })
    }

    /// Sample units sold for one trial
    /// Negative draws are truncated to zero, not resampled
    pub fn sample_units<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let units = self.normal.sample(rng);
        units.max(0.0)
    }
}
