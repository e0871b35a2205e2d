//! Dashboard report formatting

use crate::analytics::{DashboardMetrics, SmoothingWindow, TrendSeries};

use super::report::{format_title, separator, truncate};

/// Format the headline tiles and the latest smoothed value per category
pub fn format_dashboard(
    metrics: &DashboardMetrics,
    trends: &[TrendSeries],
    window: SmoothingWindow,
    symbol: &str,
) -> String {
    let mut output = format_title("Financial Intelligence Dashboard");
    output.push_str(&format!("{}\n\n", metrics.period_label()));

    output.push_str(&format!(
        "{:<22} {:>14}\n",
        "Total Spent",
        metrics.total_spent.format_whole(symbol)
    ));
    output.push_str(&format!(
        "{:<22} {:>14}\n",
        "Remaining Budget",
        metrics.remaining_budget.format_whole(symbol)
    ));
    output.push_str(&format!(
        "{:<22} {:>14}\n\n",
        "Sustainability Score",
        metrics.score_label()
    ));

    output.push_str(&format!("Spending trend (smoothing: {})\n", window));
    output.push_str(&separator(52));
    output.push('\n');

    if trends.is_empty() {
        output.push_str("No expenses in the dataset.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<20} {:>10} {:>10} {:>10}\n",
        "Category", "Latest", "Smoothed", "Days"
    ));
    for series in trends {
        let Some(latest) = series.latest() else {
            continue;
        };
        output.push_str(&format!(
            "{:<20} {:>10} {:>10} {:>10}\n",
            truncate(series.category.as_str(), 20),
            latest.date.format("%Y-%m-%d"),
            format!("{}{:.2}", symbol, latest.smoothed),
            series.points.len()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::expense;
    use crate::analytics::smoothed_trend;
    use crate::config::Settings;

    #[test]
    fn test_format_dashboard() {
        let expenses = vec![
            expense(1, 1000, "Food"),
            expense(2, 3000, "Food"),
            expense(2, 250, "Transport"),
        ];
        let metrics = DashboardMetrics::compute(&expenses, &Settings::default()).unwrap();
        let window = SmoothingWindow::default();
        let trends = smoothed_trend(&expenses, window);

        let text = format_dashboard(&metrics, &trends, window, "₹");

        assert!(text.starts_with("Financial Intelligence Dashboard\n"));
        assert!(text.contains("December 2025"));
        assert!(text.contains("₹4,250"));
        assert!(text.contains("₹1,750"));
        assert!(text.contains("72 / 100"));
        assert!(text.contains("smoothing: 3 days"));
        assert!(text.contains("₹2000.00"));
        assert!(text.contains("Transport"));
    }

    #[test]
    fn test_format_dashboard_without_expenses() {
        let metrics = DashboardMetrics::compute(&[], &Settings::default()).unwrap();
        let text = format_dashboard(&metrics, &[], SmoothingWindow::default(), "₹");
        assert!(text.contains("No expenses in the dataset."));
        assert!(text.contains("₹6,000"));
    }
}
