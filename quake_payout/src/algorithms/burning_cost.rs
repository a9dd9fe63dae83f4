//! Burning cost: the average annual payout over a window of calendar years.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::YearlyPayouts;

/// How the end year of a [`YearWindow`] is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowBounds {
    /// `[start_year, end_year]`, averaged over `end_year - start_year + 1` years.
    #[default]
    Inclusive,
    /// `[start_year, end_year)`, averaged over `end_year - start_year` years.
    HalfOpen,
}

/// A span of calendar years to average payouts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    pub start_year: i32,
    pub end_year: i32,
    #[serde(default)]
    pub bounds: WindowBounds,
}

impl YearWindow {
    /// Inclusive window `[start_year, end_year]`.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
            bounds: WindowBounds::Inclusive,
        }
    }

    /// Half-open window `[start_year, end_year)`.
    pub fn half_open(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
            bounds: WindowBounds::HalfOpen,
        }
    }

    /// A window is degenerate unless `start_year < end_year`.
    pub fn is_degenerate(&self) -> bool {
        self.start_year >= self.end_year
    }

    /// Last year that belongs to the window.
    pub fn last_year(&self) -> i32 {
        match self.bounds {
            WindowBounds::Inclusive => self.end_year,
            WindowBounds::HalfOpen => self.end_year - 1,
        }
    }

    /// Number of calendar years the average is taken over, zero when degenerate.
    pub fn span(&self) -> u32 {
        if self.is_degenerate() {
            return 0;
        }
        let years = i64::from(self.last_year()) - i64::from(self.start_year) + 1;
        u32::try_from(years).unwrap_or(u32::MAX)
    }

    pub fn contains(&self, year: i32) -> bool {
        !self.is_degenerate() && year >= self.start_year && year <= self.last_year()
    }
}

/// Burning cost over `window`.
///
/// Years absent from `payouts` add nothing to the sum but still count in the
/// divisor. A degenerate window yields zero.
pub fn burning_cost_over(payouts: &YearlyPayouts, window: &YearWindow) -> f64 {
    let span = window.span();
    if span == 0 {
        debug!(
            "Degenerate burning cost window {}..{}, returning 0",
            window.start_year, window.end_year
        );
        return 0.0;
    }

    let total = payouts.sum_between(window.start_year, window.last_year());
    total / f64::from(span)
}

/// Burning cost over the inclusive window `[start_year, end_year]`.
///
/// Returns zero when `start_year >= end_year`.
///
/// # Examples
///
/// ```
/// use quake_payout::algorithms::compute_burning_cost;
/// use quake_payout::core::YearlyPayouts;
///
/// let payouts: YearlyPayouts = vec![(2019, 100.0), (2020, 0.0)].into_iter().collect();
/// assert_eq!(compute_burning_cost(&payouts, 2017, 2020), 25.0);
/// assert_eq!(compute_burning_cost(&payouts, 2020, 2020), 0.0);
/// ```
pub fn compute_burning_cost(payouts: &YearlyPayouts, start_year: i32, end_year: i32) -> f64 {
    burning_cost_over(payouts, &YearWindow::new(start_year, end_year))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparse_series() -> YearlyPayouts {
        vec![(1990, 0.0), (1995, 60.0), (2000, 30.0), (2010, 90.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_degenerate_windows() {
        let payouts = sparse_series();
        assert_eq!(compute_burning_cost(&payouts, 1995, 1995), 0.0);
        assert_eq!(compute_burning_cost(&payouts, 2000, 1990), 0.0);
        assert_eq!(burning_cost_over(&payouts, &YearWindow::half_open(2000, 2000)), 0.0);
        assert_eq!(YearWindow::new(2000, 1990).span(), 0);
    }

    #[test]
    fn test_absent_years_count_in_divisor() {
        // 1991..=2000 holds 60 + 30 over ten calendar years.
        let cost = compute_burning_cost(&sparse_series(), 1991, 2000);
        assert_eq!(cost, 9.0);
    }

    #[test]
    fn test_half_open_excludes_end_year() {
        let payouts = sparse_series();
        let window = YearWindow::half_open(1991, 2000);
        assert_eq!(window.span(), 9);
        assert!(!window.contains(2000));
        assert_eq!(burning_cost_over(&payouts, &window), 60.0 / 9.0);
    }

    #[test]
    fn test_years_outside_window_are_ignored() {
        let cost = compute_burning_cost(&sparse_series(), 2001, 2010);
        assert_eq!(cost, 9.0);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(compute_burning_cost(&YearlyPayouts::new(), 1900, 2000), 0.0);
    }
}
