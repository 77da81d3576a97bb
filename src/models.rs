use serde::{Deserialize, Serialize};

/// Business inputs for one simulation run
/// Constructed fresh for every run and never mutated afterwards
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessParams {
    /// Expected units sold per period
    pub units_base: f64,
    /// Standard deviation of units sold
    pub units_std: f64,
    pub price_per_unit: f64,
    pub subscription_rate: f64,     // Recurring revenue per unit
    pub addon_rate: f64,            // Add-on revenue per unit
    /// Period fixed costs, excluding salaries
    pub fixed_costs: f64,
    pub variable_cost_per_unit: f64,
    /// One-time setup cost, charged in every trial
    pub non_recurring_costs: f64,
    pub num_employees: u32,
    pub employee_salary: f64,
}

impl Default for BusinessParams {
    fn default() -> Self {
        BusinessParams {
            units_base: 100.0,
            units_std: 10.0,
            price_per_unit: 100.0,
            subscription_rate: 50.0,
            addon_rate: 25.0,
            fixed_costs: 50_000.0,
            variable_cost_per_unit: 40.0,
            non_recurring_costs: 10_000.0,
            num_employees: 2,
            employee_salary: 50_000.0,
        }
    }
}

/// Revenue split by stream for a given number of units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevenueBreakdown {
    pub base: f64,
    pub subscription: f64,
    pub addons: f64,
    pub total: f64,
}

/// Cost split for a given number of units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostBreakdown {
    pub fixed: f64,         // Fixed costs including salaries
    pub variable: f64,
    pub non_recurring: f64,
    pub total: f64,
}

/// Outcome of a single trial
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialResult {
    pub units: f64,
    pub revenue_total: f64,
    pub cost_total: f64,
    pub profit: f64,
    pub roi_percent: f64,
}

/// Summary metrics derived once per run
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Infinite when each unit loses money
    pub breakeven_units: f64,
    pub poor_case_profit: f64,      // 10th percentile
    pub average_case_profit: f64,   // Mean
    pub good_case_profit: f64,      // 90th percentile
}

/// Descriptive statistics for one column of the results table
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnStats {
    pub name: &'static str,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub percentile_25: f64,
    pub percentile_50: f64,  // Median
    pub percentile_75: f64,
    pub max: f64,
}

/// One equal-width bucket of a histogram
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}
