/// Reporting and output formatting module
/// Handles all console output and result presentation

use serde::Serialize;
use crate::financial::{annual_fixed_costs, expected_breakdown, revenue_per_unit};
use crate::models::{BusinessParams, ColumnStats, HistogramBin, SummaryMetrics};

const HISTOGRAM_WIDTH: usize = 50;

/// Machine-readable report emitted with `--json`
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub params: &'a BusinessParams,
    pub num_trials: usize,
    pub seed: Option<u64>,
    pub metrics: &'a SummaryMetrics,
    pub statistics: &'a [ColumnStats],
    pub profit_histogram: &'a [HistogramBin],
}

/// Format a value as `$1,234.56`, or `-$1,234.56` when negative
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Avoid "-$0.00" for tiny negatives
    if grouped == "0" && cents == "00" {
        return "$0.00".to_string();
    }

    format!("{}${}.{}", sign, grouped, cents)
}

pub fn display_header(num_trials: usize, seed: Option<u64>) {
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                     BUSINESS MONTE CARLO SIMULATION                          ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");

    match seed {
        Some(seed) => println!("Trials: {} (seed {})\n", num_trials, seed),
        None => println!("Trials: {}\n", num_trials),
    }
}

/// Display per-unit revenue by stream
pub fn display_revenue_breakdown(params: &BusinessParams) {
    println!("Revenue Breakdown (Per Unit):");
    println!("    Base Price:            {}", format_currency(params.price_per_unit));
    println!("  + Annual Subscription:   {}", format_currency(params.subscription_rate));
    println!("  + Annual Add-ons:        {}", format_currency(params.addon_rate));
    println!("  = Total Revenue/Unit:    {}\n", format_currency(revenue_per_unit(params)));
}

/// Display revenue streams and cost split at the expected units sold
pub fn display_expected_breakdown(params: &BusinessParams) {
    let (revenue, costs) = expected_breakdown(params);

    println!("Expected Case ({:.0} units):", params.units_base);
    println!("  Revenue: base {} + subscription {} + add-ons {} = {}",
             format_currency(revenue.base), format_currency(revenue.subscription),
             format_currency(revenue.addons), format_currency(revenue.total));
    println!("  Costs:   fixed {} + variable {} + one-time {} = {}\n",
             format_currency(costs.fixed), format_currency(costs.variable),
             format_currency(costs.non_recurring), format_currency(costs.total));
}

/// Display good, average and poor profit scenarios
pub fn display_profit_scenarios(metrics: &SummaryMetrics) {
    println!("Profit Scenarios:");
    println!("  Good Case (90th):  {}", format_currency(metrics.good_case_profit));
    println!("  Average Case:      {}", format_currency(metrics.average_case_profit));
    println!("  Poor Case (10th):  {}\n", format_currency(metrics.poor_case_profit));
}

/// Display breakeven and cost metrics
pub fn display_key_metrics(params: &BusinessParams, metrics: &SummaryMetrics) {
    println!("Key Metrics:");
    if metrics.breakeven_units.is_finite() {
        println!("  Breakeven Units:     {:.1}", metrics.breakeven_units);
    } else {
        println!("  Breakeven Units:     unreachable (no positive unit margin)");
    }
    println!("  Annual Fixed Costs:  {}", format_currency(annual_fixed_costs(params)));
    println!("  Cost per Unit:       {}\n", format_currency(params.variable_cost_per_unit));
}

/// Display the detailed statistics table, one column per results field
pub fn display_statistics(stats: &[ColumnStats]) {
    println!("Detailed Statistics:");
    print!("  {:>6}", "");
    for column in stats {
        print!(" {:>14}", column.name);
    }
    println!();

    let rows: [(&str, fn(&ColumnStats) -> f64); 8] = [
        ("count", |c| c.count as f64),
        ("mean", |c| c.mean),
        ("std", |c| c.std_dev),
        ("min", |c| c.min),
        ("25%", |c| c.percentile_25),
        ("50%", |c| c.percentile_50),
        ("75%", |c| c.percentile_75),
        ("max", |c| c.max),
    ];

    for (label, value) in rows {
        print!("  {:>6}", label);
        for column in stats {
            print!(" {:>14.2}", value(column));
        }
        println!();
    }
    println!();
}

/// Display the profit distribution as a horizontal bar chart
pub fn display_histogram(bins: &[HistogramBin]) {
    println!("Profit Distribution:");

    let peak = bins.iter().map(|b| b.count).max().unwrap_or(0);
    if peak == 0 {
        println!("  (no data)\n");
        return;
    }

    for bin in bins {
        let bar_len = bin.count * HISTOGRAM_WIDTH / peak;
        println!(
            "  {:>16} | {:<width$} {}",
            format_currency(bin.lower),
            "#".repeat(bar_len),
            bin.count,
            width = HISTOGRAM_WIDTH
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.5), "$5.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(100_000.0), "$100,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1_500.25), "-$1,500.25");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_currency_infinite() {
        assert_eq!(format_currency(f64::INFINITY), "$inf");
    }
}
