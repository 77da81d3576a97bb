/// Financial model module
/// Pure revenue and cost formulas for a given number of units sold

use crate::models::{BusinessParams, CostBreakdown, RevenueBreakdown};

/// Revenue for `units` sold, split by stream
pub fn calculate_revenue(units: f64, params: &BusinessParams) -> RevenueBreakdown {
    let base = units * params.price_per_unit;
    let subscription = units * params.subscription_rate;
    let addons = units * params.addon_rate;
    let total = base + subscription + addons;

    RevenueBreakdown {
        base,
        subscription,
        addons,
        total,
    }
}

/// Costs for `units` sold
/// Non-recurring costs are included in every call's total
pub fn calculate_costs(units: f64, params: &BusinessParams) -> CostBreakdown {
    let employee_costs = employee_costs(params);
    let fixed = params.fixed_costs + employee_costs;
    let variable = units * params.variable_cost_per_unit;
    let total = fixed + variable + params.non_recurring_costs;

    CostBreakdown {
        fixed,
        variable,
        non_recurring: params.non_recurring_costs,
        total,
    }
}

pub fn employee_costs(params: &BusinessParams) -> f64 {
    params.num_employees as f64 * params.employee_salary
}

/// Revenue earned per unit across all streams
pub fn revenue_per_unit(params: &BusinessParams) -> f64 {
    params.price_per_unit + params.subscription_rate + params.addon_rate
}

/// Marginal profit per unit sold
pub fn unit_contribution(params: &BusinessParams) -> f64 {
    revenue_per_unit(params) - params.variable_cost_per_unit
}

/// Costs that do not scale with units: fixed, salaries and one-time costs
pub fn fixed_and_nonrecurring(params: &BusinessParams) -> f64 {
    params.fixed_costs + params.non_recurring_costs + employee_costs(params)
}

/// Recurring fixed costs per period (excludes one-time costs)
pub fn annual_fixed_costs(params: &BusinessParams) -> f64 {
    params.fixed_costs + employee_costs(params)
}

/// Revenue and cost breakdown at the expected units sold
pub fn expected_breakdown(params: &BusinessParams) -> (RevenueBreakdown, CostBreakdown) {
    let units = params.units_base;
    (calculate_revenue(units, params), calculate_costs(units, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> BusinessParams {
        BusinessParams {
            units_base: 1_000.0,
            units_std: 100.0,
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

    #[test]
    fn test_revenue_breakdown() {
        let revenue = calculate_revenue(10.0, &reference_params());

        assert_eq!(revenue.base, 1_000.0);
        assert_eq!(revenue.subscription, 500.0);
        assert_eq!(revenue.addons, 250.0);
        assert_eq!(revenue.total, 1_750.0);
    }

    #[test]
    fn test_cost_breakdown_includes_salaries_and_one_time_costs() {
        let costs = calculate_costs(10.0, &reference_params());

        assert_eq!(costs.fixed, 150_000.0);
        assert_eq!(costs.variable, 400.0);
        assert_eq!(costs.non_recurring, 10_000.0);
        assert_eq!(costs.total, 160_400.0);
    }

    #[test]
    fn test_zero_units_leaves_only_fixed_costs() {
        let params = reference_params();

        assert_eq!(calculate_revenue(0.0, &params).total, 0.0);
        assert_eq!(calculate_costs(0.0, &params).total, 160_000.0);
    }

    #[test]
    fn test_formulas_are_deterministic() {
        let params = reference_params();
        let units = 1_234.567;

        let a = calculate_revenue(units, &params);
        let b = calculate_revenue(units, &params);
        assert_eq!(a.total.to_bits(), b.total.to_bits());

        let c = calculate_costs(units, &params);
        let d = calculate_costs(units, &params);
        assert_eq!(c.total.to_bits(), d.total.to_bits());
    }

    #[test]
    fn test_margin_helpers() {
        let params = reference_params();

        assert_eq!(revenue_per_unit(&params), 175.0);
        assert_eq!(unit_contribution(&params), 135.0);
        assert_eq!(fixed_and_nonrecurring(&params), 160_000.0);
        assert_eq!(annual_fixed_costs(&params), 150_000.0);
    }

    #[test]
    fn test_expected_breakdown_uses_units_base() {
        let params = reference_params();
        let (revenue, costs) = expected_breakdown(&params);

        assert_eq!(revenue.base, 100_000.0);
        assert_eq!(revenue.subscription, 50_000.0);
        assert_eq!(revenue.addons, 25_000.0);
        assert_eq!(costs.fixed, 150_000.0);
        assert_eq!(costs.variable, 40_000.0);
        assert_eq!(costs.non_recurring, 10_000.0);
        assert_eq!(revenue.total - costs.total, -25_000.0);
    }
}
