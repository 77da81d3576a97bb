mod config;
mod demand;
mod error;
mod financial;
mod models;
mod monte_carlo;
mod reporting;
mod rng;
mod statistics;

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use config::ScenarioConfig;
use monte_carlo::{run_simulation, run_simulation_seeded};
use reporting::{display_expected_breakdown, display_header, display_histogram, display_key_metrics,
                display_profit_scenarios, display_revenue_breakdown, display_statistics, JsonReport};
use rng::entropy_rng;
use statistics::{describe_results, histogram};

/// Business Monte Carlo simulation
/// Estimates the profit distribution of a unit-sales business under uncertain demand
#[derive(Parser, Debug)]
#[command(name = "business-monte-carlo")]
#[command(version)]
struct Args {
    /// JSON scenario file (params, num_trials, seed)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Expected units sold
    #[arg(long)]
    units_base: Option<f64>,

    /// Standard deviation of units sold
    #[arg(long)]
    units_std: Option<f64>,

    /// Base price per unit
    #[arg(long)]
    price: Option<f64>,

    /// Annual subscription revenue per unit
    #[arg(long)]
    subscription: Option<f64>,

    /// Annual add-on revenue per unit
    #[arg(long)]
    addons: Option<f64>,

    /// Fixed costs per year, excluding salaries
    #[arg(long)]
    fixed_costs: Option<f64>,

    /// Variable cost per unit sold
    #[arg(long)]
    variable_cost: Option<f64>,

    /// One-time setup costs
    #[arg(long)]
    one_time_costs: Option<f64>,

    /// Number of employees
    #[arg(long)]
    employees: Option<u32>,

    /// Salary per employee per year
    #[arg(long)]
    salary: Option<f64>,

    /// Number of simulated trials
    #[arg(long, value_parser = clap::value_parser!(u64).range(100..=10_000))]
    trials: Option<u64>,

    /// Seed for reproducible runs (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of profit histogram bins
    #[arg(long, default_value_t = 50)]
    bins: usize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Apply command-line overrides on top of the scenario file
    fn apply(&self, scenario: &mut ScenarioConfig) {
        let params = &mut scenario.params;
        let overrides = [
            (self.units_base, &mut params.units_base),
            (self.units_std, &mut params.units_std),
            (self.price, &mut params.price_per_unit),
            (self.subscription, &mut params.subscription_rate),
            (self.addons, &mut params.addon_rate),
            (self.fixed_costs, &mut params.fixed_costs),
            (self.variable_cost, &mut params.variable_cost_per_unit),
            (self.one_time_costs, &mut params.non_recurring_costs),
            (self.salary, &mut params.employee_salary),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }

        if let Some(employees) = self.employees {
            params.num_employees = employees;
        }
        if let Some(trials) = self.trials {
            scenario.num_trials = trials as usize;
        }
        if self.seed.is_some() {
            scenario.seed = self.seed;
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut scenario = match &args.config {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => ScenarioConfig::default(),
    };
    args.apply(&mut scenario);
    scenario.params.validate()?;

    let params = &scenario.params;
    let (results, metrics) = match scenario.seed {
        Some(seed) => run_simulation_seeded(params, scenario.num_trials, seed)?,
        None => run_simulation(params, scenario.num_trials, &mut entropy_rng())?,
    };

    let stats = describe_results(&results);
    let profits: Vec<f64> = results.iter().map(|r| r.profit).collect();
    let bins = histogram(&profits, args.bins);

    if args.json {
        let report = JsonReport {
            params,
            num_trials: scenario.num_trials,
            seed: scenario.seed,
            metrics: &metrics,
            statistics: &stats,
            profit_histogram: &bins,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    display_header(scenario.num_trials, scenario.seed);
    display_revenue_breakdown(params);
    display_expected_breakdown(params);
    display_profit_scenarios(&metrics);
    display_key_metrics(params, &metrics);
    display_statistics(&stats);
    display_histogram(&bins);

    Ok(())
}
