/// Monte Carlo simulation and summary metrics module

use rand::Rng;
use crate::demand::DemandSampler;
use crate::error::{SimError, SimResult};
use crate::financial::{calculate_costs, calculate_revenue, fixed_and_nonrecurring, unit_contribution};
use crate::models::{BusinessParams, SummaryMetrics, TrialResult};
use crate::rng::seeded_rng;

/// Run the Monte Carlo simulation with an injected random source
/// Returns one row per trial plus the run's summary metrics
pub fn run_simulation<R: Rng + ?Sized>(
    params: &BusinessParams,
    num_trials: usize,
    rng: &mut R,
) -> SimResult<(Vec<TrialResult>, SummaryMetrics)> {
    if num_trials == 0 {
        return Err(SimError::InvalidTrialCount { requested: num_trials });
    }

    let sampler = DemandSampler::new(params)?;
    log::info!(
        "running {num_trials} trials (units {} ± {})",
        params.units_base,
        params.units_std
    );

    let mut results = Vec::with_capacity(num_trials);

    for _ in 0..num_trials {
        let units = sampler.sample_units(rng);
        results.push(run_trial(units, params));
    }

    let metrics = summarize(params, &results);
    log::debug!(
        "summary: breakeven={:.2} poor={:.2} average={:.2} good={:.2}",
        metrics.breakeven_units,
        metrics.poor_case_profit,
        metrics.average_case_profit,
        metrics.good_case_profit
    );

    Ok((results, metrics))
}

/// Run the simulation with a generator seeded from `seed`
/// Identical inputs and seed give bit-identical results
pub fn run_simulation_seeded(
    params: &BusinessParams,
    num_trials: usize,
    seed: u64,
) -> SimResult<(Vec<TrialResult>, SummaryMetrics)> {
    log::info!("seeded run: seed={seed}");
    let mut rng = seeded_rng(seed);
    run_simulation(params, num_trials, &mut rng)
}

/// Financial outcome for one sampled units value
pub fn run_trial(units: f64, params: &BusinessParams) -> TrialResult {
    let revenue = calculate_revenue(units, params);
    let costs = calculate_costs(units, params);

    let profit = revenue.total - costs.total;
    // ROI is defined as zero when there is nothing spent
    let roi_percent = if costs.total > 0.0 {
        profit / costs.total * 100.0
    } else {
        0.0
    };

    TrialResult {
        units,
        revenue_total: revenue.total,
        cost_total: costs.total,
        profit,
        roi_percent,
    }
}

/// Units needed for zero profit, or infinity when each unit loses money
pub fn breakeven_units(params: &BusinessParams) -> f64 {
    let contribution = unit_contribution(params);
    if contribution > 0.0 {
        fixed_and_nonrecurring(params) / contribution
    } else {
        log::warn!("unit contribution {contribution:.2} is not positive, breakeven is unreachable");
        f64::INFINITY
    }
}

/// Derive summary metrics from a completed results table
pub fn summarize(params: &BusinessParams, results: &[TrialResult]) -> SummaryMetrics {
    let mut profits: Vec<f64> = results.iter().map(|r| r.profit).collect();
    let average_case_profit = mean(&profits);
    sort_values(&mut profits);

    SummaryMetrics {
        breakeven_units: breakeven_units(params),
        poor_case_profit: percentile(&profits, 10.0),
        average_case_profit,
        good_case_profit: percentile(&profits, 90.0),
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn sort_values(values: &mut [f64]) {
    values.sort_by(|a, b| a.total_cmp(b));
}

/// Linearly interpolated percentile of an ascending slice, `p` in [0, 100]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let w = rank - lower as f64;
        sorted[lower] + (sorted[upper] - sorted[lower]) * w
    }
}
