//! Spending distribution: amount histogram with a density overlay
//!
//! Bins are shared by every category so the per-category counts stack.
//! Density curves use a Gaussian kernel with Scott's bandwidth and are
//! scaled to histogram counts so both can share one axis.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use tracing::warn;

use crate::models::{Category, Expense};

/// Number of bins used when none is requested
pub const DEFAULT_BINS: usize = 20;

/// Grid resolution for density curves
pub const DENSITY_POINTS: usize = 100;

/// One histogram bin: `[lower, upper)`, except the last which is closed
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub counts: BTreeMap<Category, usize>,
}

impl HistogramBin {
    /// Count across all categories
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Midpoint of the bin
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

/// Histogram of expense amounts
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    pub bin_width: f64,
}

impl Histogram {
    /// Bin expense amounts into `bins` equal-width bins
    ///
    /// When every amount is identical the range is widened to
    /// `[v - 0.5, v + 0.5]`. No expenses (or zero bins) gives an empty
    /// histogram.
    pub fn build(expenses: &[Expense], bins: usize) -> Self {
        if expenses.is_empty() || bins == 0 {
            return Self::default();
        }

        let values: Vec<f64> = expenses.iter().map(|e| e.amount.as_f64()).collect();
        let (mut min, mut max) = min_max(&values);
        if min == max {
            min -= 0.5;
            max += 0.5;
        }
        let bin_width = (max - min) / bins as f64;

        let mut hist_bins: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                lower: min + i as f64 * bin_width,
                upper: if i + 1 == bins {
                    max
                } else {
                    min + (i + 1) as f64 * bin_width
                },
                counts: BTreeMap::new(),
            })
            .collect();

        for (expense, value) in expenses.iter().zip(&values) {
            let idx = (((value - min) / bin_width).floor() as usize).min(bins - 1);
            *hist_bins[idx]
                .counts
                .entry(expense.category.clone())
                .or_insert(0) += 1;
        }

        Self {
            bins: hist_bins,
            bin_width,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Lower edge of the first bin and upper edge of the last
    pub fn span(&self) -> Option<(f64, f64)> {
        Some((self.bins.first()?.lower, self.bins.last()?.upper))
    }

    /// Tallest bin count
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(HistogramBin::total).max().unwrap_or(0)
    }

    /// Every category that appears in any bin, in name order
    pub fn categories(&self) -> Vec<Category> {
        let mut cats: Vec<Category> = self
            .bins
            .iter()
            .flat_map(|b| b.counts.keys().cloned())
            .collect();
        cats.sort();
        cats.dedup();
        cats
    }

    /// Density curve per category, scaled to this histogram's counts
    ///
    /// Categories with too few samples or no spread get no curve.
    pub fn density_by_category(&self, expenses: &[Expense]) -> Vec<(Category, DensityCurve)> {
        let Some((lo, hi)) = self.span() else {
            return Vec::new();
        };

        let mut samples: BTreeMap<Category, Vec<f64>> = BTreeMap::new();
        for expense in expenses {
            samples
                .entry(expense.category.clone())
                .or_default()
                .push(expense.amount.as_f64());
        }

        samples
            .into_iter()
            .filter_map(|(category, values)| {
                let scale = values.len() as f64 * self.bin_width;
                match density_curve(&values, lo, hi, DENSITY_POINTS, scale) {
                    Some(curve) => Some((category, curve)),
                    None => {
                        warn!(%category, samples = values.len(), "skipping density curve");
                        None
                    }
                }
            })
            .collect()
    }
}

/// A density estimate sampled on an even grid
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    /// `(x, scaled density)` pairs in ascending x
    pub points: Vec<(f64, f64)>,
}

impl DensityCurve {
    pub fn peak(&self) -> f64 {
        self.points.iter().map(|(_, y)| *y).fold(0.0_f64, f64::max)
    }
}

/// Gaussian kernel density estimate over `[lo, hi]`
///
/// Bandwidth follows Scott's rule, `n^(-1/5)` times the sample standard
/// deviation. Values are multiplied by `scale`. Returns `None` for fewer
/// than two samples, zero variance, or a degenerate grid.
pub fn density_curve(
    values: &[f64],
    lo: f64,
    hi: f64,
    points: usize,
    scale: f64,
) -> Option<DensityCurve> {
    let n = values.len();
    if n < 2 || points < 2 || hi <= lo {
        return None;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std_dev = variance.sqrt();
    if std_dev <= f64::EPSILON {
        return None;
    }

    let bandwidth = std_dev * (n as f64).powf(-0.2);
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * PI).sqrt());
    let step = (hi - lo) / (points - 1) as f64;

    let curve = (0..points)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density: f64 = values
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density * scale)
        })
        .collect();

    Some(DensityCurve { points: curve })
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        })
}
