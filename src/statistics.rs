/// Descriptive statistics over the results table
/// Column summaries and the profit histogram shown in reports

use crate::models::{ColumnStats, HistogramBin, TrialResult};
use crate::monte_carlo::{mean, percentile, sort_values};

/// Summarize a single column of values
pub fn describe_column(name: &'static str, values: &[f64]) -> ColumnStats {
    let count = values.len();
    let mean = mean(values);

    // Sample standard deviation (n - 1)
    let std_dev = if count > 1 {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };

    let mut sorted = values.to_vec();
    sort_values(&mut sorted);

    ColumnStats {
        name,
        count,
        mean,
        std_dev,
        min: sorted.first().copied().unwrap_or(0.0),
        percentile_25: percentile(&sorted, 25.0),
        percentile_50: percentile(&sorted, 50.0),
        percentile_75: percentile(&sorted, 75.0),
        max: sorted.last().copied().unwrap_or(0.0),
    }
}

/// Summarize every column of the results table
pub fn describe_results(results: &[TrialResult]) -> Vec<ColumnStats> {
    let column = |f: fn(&TrialResult) -> f64| results.iter().map(f).collect::<Vec<f64>>();

    vec![
        describe_column("Units", &column(|r| r.units)),
        describe_column("Revenue", &column(|r| r.revenue_total)),
        describe_column("Costs", &column(|r| r.cost_total)),
        describe_column("Profit", &column(|r| r.profit)),
        describe_column("ROI", &column(|r| r.roi_percent)),
    ]
}

/// Equal-width histogram over [min, max]
/// The maximum lands in the last bin; a constant column gives a single bin
pub fn histogram(values: &[f64], num_bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || num_bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max <= min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / num_bins as f64;
    let mut bins: Vec<HistogramBin> = (0..num_bins)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == num_bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for v in values {
        let index = (((v - min) / width) as usize).min(num_bins - 1);
        bins[index].count += 1;
    }

    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_describe_column() {
        let stats = describe_column("Profit", &[4.0, 1.0, 3.0, 2.0]);

        assert_eq!(stats.count, 4);
        assert_approx(stats.mean, 2.5);
        assert_approx(stats.std_dev, (5.0_f64 / 3.0).sqrt());
        assert_eq!(stats.min, 1.0);
        assert_approx(stats.percentile_25, 1.75);
        assert_approx(stats.percentile_50, 2.5);
        assert_approx(stats.percentile_75, 3.25);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_single_value_has_zero_std_dev() {
        let stats = describe_column("Units", &[42.0]);

        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.percentile_50, 42.0);
    }

    #[test]
    fn test_describe_results_covers_all_columns() {
        let rows = vec![
            TrialResult { units: 1.0, revenue_total: 10.0, cost_total: 5.0, profit: 5.0, roi_percent: 100.0 },
            TrialResult { units: 3.0, revenue_total: 30.0, cost_total: 15.0, profit: 15.0, roi_percent: 100.0 },
        ];
        let stats = describe_results(&rows);
        let names: Vec<&str> = stats.iter().map(|s| s.name).collect();

        assert_eq!(names, ["Units", "Revenue", "Costs", "Profit", "ROI"]);
        assert_approx(stats[3].mean, 10.0);
        assert_approx(stats[4].std_dev, 0.0);
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let bins = histogram(&values, 10);

        assert_eq!(bins.len(), 10);
        assert!(bins.iter().all(|b| b.count == 10));
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[9].upper, 99.0);
    }

    #[test]
    fn test_histogram_of_constant_column() {
        let bins = histogram(&[7.0; 25], 50);

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 25);
    }

    #[test]
    fn test_histogram_of_empty_column() {
        assert!(histogram(&[], 50).is_empty());
        assert!(histogram(&[1.0, 2.0], 0).is_empty());
    }
}
