//! Analytics report formatting
//!
//! Trend and share tables are rendered with `tabled`; the histogram is a
//! column of text bars with the density overlay summarised per category.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::analytics::{DensityCurve, Histogram, ShareBreakdown, TrendSeries};
use crate::models::Category;

use super::report::{format_bar, format_percentage};

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Daily Total")]
    amount: String,
    #[tabled(rename = "Smoothed")]
    smoothed: String,
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format every smoothed trend point as a table, date-major
pub fn format_trend_table(trends: &[TrendSeries], symbol: &str) -> String {
    let mut rows: Vec<(chrono::NaiveDate, &Category, TrendRow)> = trends
        .iter()
        .flat_map(|series| {
            series.points.iter().map(move |p| {
                (
                    p.date,
                    &series.category,
                    TrendRow {
                        date: p.date.format("%Y-%m-%d").to_string(),
                        category: series.category.to_string(),
                        amount: p.amount.format_with_symbol(symbol),
                        smoothed: format!("{}{:.2}", symbol, p.smoothed),
                    },
                )
            })
        })
        .collect();

    if rows.is_empty() {
        return "No expenses in the selected range.\n".to_string();
    }

    rows.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    let rows: Vec<TrendRow> = rows.into_iter().map(|(_, _, row)| row).collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format the histogram as text bars with per-category counts
pub fn format_histogram(
    histogram: &Histogram,
    density: &[(Category, DensityCurve)],
    symbol: &str,
) -> String {
    if histogram.is_empty() {
        return "No expenses to bin.\n".to_string();
    }

    let mut output = String::new();
    let max = histogram.max_count() as f64;

    for bin in &histogram.bins {
        let breakdown: Vec<String> = bin
            .counts
            .iter()
            .map(|(category, count)| format!("{} {}", category, count))
            .collect();

        output.push_str(&format!(
            "{:>12} - {:<12} {} {:>3}  {}\n",
            format!("{}{:.0}", symbol, bin.lower),
            format!("{}{:.0}", symbol, bin.upper),
            format_bar(bin.total() as f64, max, BAR_WIDTH),
            bin.total(),
            breakdown.join(", ")
        ));
    }

    if !density.is_empty() {
        output.push_str("\nDensity peaks:\n");
        for (category, curve) in density {
            let mode = curve
                .points
                .iter()
                .copied()
                .fold(None, |best: Option<(f64, f64)>, p| match best {
                    Some(b) if b.1 >= p.1 => Some(b),
                    _ => Some(p),
                });
            if let Some((x, _)) = mode {
                output.push_str(&format!("  {:<20} around {}{:.0}\n", category, symbol, x));
            }
        }
    }

    output
}

/// Format category totals with their share of all spending
pub fn format_shares(breakdown: &ShareBreakdown, symbol: &str) -> String {
    if breakdown.is_empty() {
        return "No expenses to break down.\n".to_string();
    }

    let max = breakdown
        .shares
        .iter()
        .map(|s| s.percentage)
        .fold(0.0, f64::max);

    let rows: Vec<ShareRow> = breakdown
        .shares
        .iter()
        .map(|s| ShareRow {
            category: s.category.to_string(),
            total: s.total.format_with_symbol(symbol),
            share: format_percentage(s.percentage),
            bar: format_bar(s.percentage, max, 20),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!(
        "{}\nTotal {}{}\n",
        table,
        symbol,
        breakdown.grand_total_whole()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::expense;
    use crate::analytics::{category_shares, smoothed_trend, SmoothingWindow};

    #[test]
    fn test_trend_table_is_date_major() {
        let expenses = vec![
            expense(2, 40, "Transport"),
            expense(1, 100, "Food"),
            expense(2, 300, "Food"),
        ];
        let trends = smoothed_trend(&expenses, SmoothingWindow::default());
        let text = format_trend_table(&trends, "₹");

        let first_food = text.find("2025-12-01").unwrap();
        let second_food = text.find("Food").unwrap();
        let transport = text.find("Transport").unwrap();
        assert!(first_food < transport);
        assert!(second_food < transport);
        assert!(text.contains("₹200.00"));
    }

    #[test]
    fn test_histogram_lists_every_bin() {
        let expenses = vec![
            expense(1, 100, "Food"),
            expense(2, 200, "Food"),
            expense(3, 500, "Rent"),
        ];
        let histogram = Histogram::build(&expenses, 4);
        let density = histogram.density_by_category(&expenses);
        let text = format_histogram(&histogram, &density, "₹");

        assert_eq!(text.lines().take_while(|l| !l.is_empty()).count(), 4);
        assert!(text.contains("Rent 1"));
        assert!(text.contains("Density peaks:"));
    }

    #[test]
    fn test_shares_include_donut_total() {
        let expenses = vec![expense(1, 300, "Food"), expense(2, 100, "Rent")];
        let text = format_shares(&category_shares(&expenses), "₹");

        assert!(text.contains("75%"));
        assert!(text.contains("25%"));
        assert!(text.contains("Total ₹400"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(format_trend_table(&[], "₹").contains("No expenses"));
        assert!(format_histogram(&Histogram::default(), &[], "₹").contains("No expenses"));
        assert!(format_shares(&category_shares(&[]), "₹").contains("No expenses"));
    }
}
