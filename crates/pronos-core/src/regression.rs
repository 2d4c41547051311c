//! Ordinary least-squares line fitting
//!
//! Closed-form single-feature OLS over running sums. This is the whole of
//! the model: two scalar coefficients over the ordinal-day axis, created
//! fresh per request and discarded with the response.

/// A fitted line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fit a least-squares line through `(x, y)` pairs.
    ///
    /// When every x is identical the normal-equation denominator is zero;
    /// the fit degrades to a horizontal line through the mean of y rather
    /// than failing. Callers guarantee at least one point.
    pub fn fit(points: &[(f64, f64)]) -> Self {
        let n = points.len() as f64;

        let mut x_sum = 0.0;
        let mut y_sum = 0.0;
        let mut x2_sum = 0.0;
        let mut xy_sum = 0.0;
        for &(x, y) in points {
            x_sum += x;
            y_sum += y;
            x2_sum += x * x;
            xy_sum += x * y;
        }

        let denom = n * x2_sum - x_sum * x_sum;
        if denom.abs() < f64::EPSILON * n * x2_sum.max(1.0) {
            // Degenerate axis: all observations share one date
            return Self {
                slope: 0.0,
                intercept: y_sum / n,
            };
        }

        let slope = (n * xy_sum - x_sum * y_sum) / denom;
        let intercept = (y_sum - slope * x_sum) / n;

        Self { slope, intercept }
    }

    /// Evaluate the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_through_two_points() {
        let fit = LinearFit::fit(&[(1.0, 10.0), (2.0, 20.0)]);
        assert!((fit.slope - 10.0).abs() < 1e-9);
        assert!(fit.intercept.abs() < 1e-9);
        assert!((fit.predict(3.0) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_line() {
        let fit = LinearFit::fit(&[(5.0, 100.0), (9.0, 100.0)]);
        assert!(fit.slope.abs() < 1e-9);
        assert!((fit.intercept - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_single_x() {
        // All points on the same day: horizontal line through the mean
        let fit = LinearFit::fit(&[(3.0, 10.0), (3.0, 20.0), (3.0, 30.0)]);
        assert_eq!(fit.slope, 0.0);
        assert!((fit.intercept - 20.0).abs() < 1e-9);
        assert!(fit.predict(100.0).is_finite());
    }

    #[test]
    fn test_least_squares_minimizes_residuals() {
        // y = 2x + 1 with symmetric noise: fit recovers the true line
        let points = [(0.0, 1.5), (1.0, 2.5), (2.0, 5.5), (3.0, 6.5)];
        let fit = LinearFit::fit(&points);
        assert!((fit.slope - 1.8).abs() < 1e-9);
        assert!((fit.intercept - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_large_ordinals_stay_finite() {
        // Ordinal day numbers are ~739000 for current dates
        let fit = LinearFit::fit(&[(739100.0, 10.0), (739101.0, 20.0)]);
        assert!((fit.slope - 10.0).abs() < 1e-6);
        assert!((fit.predict(739102.0) - 30.0).abs() < 1e-6);
    }
}
