//! Newton-Cotes quadrature weights.
//!
//! Both tables are indexed by `order - 1` for orders 1..=4 (trapezoidal,
//! Simpson 1/3, Simpson 3/8, Boole). They are fixed at compile time and
//! shared read-only by the composite integrator.

/// Weight applied to the two endpoints of the full interval.
pub const ENDPOINT_WEIGHTS: [f64; 4] = [1.0 / 2.0, 1.0 / 3.0, 3.0 / 8.0, 14.0 / 45.0];

/// Weights applied to interior grid points, indexed by `k % order`.
///
/// Position 0 is a panel boundary shared by two adjacent panels and so
/// carries twice the single-panel endpoint weight.
pub static INTERIOR_WEIGHTS: [&[f64]; 4] = [
    &[1.0],
    &[2.0 / 3.0, 4.0 / 3.0],
    &[3.0 / 4.0, 9.0 / 8.0, 9.0 / 8.0],
    &[28.0 / 45.0, 64.0 / 45.0, 8.0 / 15.0, 64.0 / 45.0],
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_row_lengths() {
        for (i, row) in INTERIOR_WEIGHTS.iter().enumerate() {
            assert_eq!(row.len(), i + 1);
        }
    }

    #[test]
    fn test_panel_weights_sum_to_order() {
        // A single panel of order n spans n sub-intervals; integrating the
        // constant 1 over it must give n*h, so its weights sum to n.
        for n in 1..=4usize {
            let interior: f64 = INTERIOR_WEIGHTS[n - 1][1..].iter().sum();
            let total = 2.0 * ENDPOINT_WEIGHTS[n - 1] + interior;
            assert_abs_diff_eq!(total, n as f64, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_shared_boundary_is_doubled_endpoint() {
        for n in 1..=4usize {
            assert_abs_diff_eq!(
                INTERIOR_WEIGHTS[n - 1][0],
                2.0 * ENDPOINT_WEIGHTS[n - 1],
                epsilon = 1e-14
            );
        }
    }
}
