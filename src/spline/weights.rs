//! Closed-form B-spline interpolation weights
//!
//! For a fractional coordinate, the spline of order `p` mixes `p + 1`
//! neighboring coefficients. The mixing weights are fixed piecewise
//! polynomials of the centered fractional distance; they are evaluated here
//! exactly as SciPy's `ni_splines.c` writes them, since interpolation is
//! only exact when these polynomials match the basis the prefilter inverts.

use crate::error::{Error, Result};

/// Interpolation weights for a spline order at coordinate `x`
///
/// Returns `order + 1` weights for the coefficients surrounding `x`,
/// supported for orders 1-5. The centered fractional distance is
/// `x - floor(x)` for odd orders and `x - floor(x + 0.5)` for even orders
/// (even-order splines are knot-centered between samples).
///
/// The final weight is computed as one minus the sum of the others rather
/// than from its own polynomial, so the weights sum to 1 exactly in
/// floating point.
pub fn spline_weights(order: usize, x: f64) -> Result<Vec<f64>> {
    let wx = if order & 1 == 1 {
        x - x.floor()
    } else {
        x - (x + 0.5).floor()
    };

    let mut w = vec![0.0; order + 1];
    match order {
        1 => {
            w[0] = 1.0 - wx;
        }
        2 => {
            w[1] = 0.75 - wx * wx;
            let wy = 0.5 - wx;
            w[0] = 0.5 * wy * wy;
        }
        3 => {
            w[1] = (wx * wx * (wx - 2.0) * 3.0 + 4.0) / 6.0;
            let wy = 1.0 - wx;
            w[2] = (wy * wy * (wy - 2.0) * 3.0 + 4.0) / 6.0;
            w[0] = wy * wy * wy / 6.0;
        }
        4 => {
            let mut wy = wx * wx;
            w[2] = wy * (wy * 0.25 - 0.625) + 115.0 / 192.0;
            wy = 1.0 + wx;
            w[1] = wy * (wy * (wy * (5.0 - wy) / 6.0 - 1.25) + 5.0 / 24.0) + 55.0 / 96.0;
            wy = 1.0 - wx;
            w[3] = wy * (wy * (wy * (5.0 - wy) / 6.0 - 1.25) + 5.0 / 24.0) + 55.0 / 96.0;
            wy = 0.5 - wx;
            wy *= wy;
            w[0] = wy * wy / 24.0;
        }
        5 => {
            let mut wy = wx * wx;
            w[2] = wy * (wy * (0.25 - wx / 12.0) - 0.5) + 0.55;
            wy = 1.0 - wx;
            wy *= wy;
            w[3] = wy * (wy * (0.25 - (1.0 - wx) / 12.0) - 0.5) + 0.55;
            wy = wx + 1.0;
            w[1] = wy * (wy * (wy * (wy * (wy / 24.0 - 0.375) + 1.25) - 1.75) + 0.625) + 0.425;
            wy = 2.0 - wx;
            w[4] = wy * (wy * (wy * (wy * (wy / 24.0 - 0.375) + 1.25) - 1.75) + 0.625) + 0.425;
            wy = 1.0 - wx;
            wy *= wy;
            w[0] = (1.0 - wx) * wy * wy / 120.0;
        }
        _ => {
            return Err(Error::UnsupportedOrder {
                order,
                op: "spline_weights",
            });
        }
    }

    // Last weight closes the partition of unity exactly.
    let partial: f64 = w[..order].iter().sum();
    w[order] = 1.0 - partial;

    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one_exactly() {
        for order in 1..=5 {
            for &x in &[0.0, 0.25, 0.5, 0.75, 1.0 / 3.0, 2.9, -1.4, 17.0] {
                let w = spline_weights(order, x).unwrap();
                assert_eq!(w.len(), order + 1);
                let sum: f64 = w.iter().sum();
                assert!(
                    (sum - 1.0).abs() <= f64::EPSILON,
                    "order {} at x={} sums to {}",
                    order,
                    x,
                    sum
                );
            }
        }
    }

    #[test]
    fn test_cubic_weights_at_integer() {
        // At integer coordinates the cubic basis collapses to (1, 4, 1)/6.
        let w = spline_weights(3, 7.0).unwrap();
        assert!((w[0] - 1.0 / 6.0).abs() < 1e-15);
        assert!((w[1] - 4.0 / 6.0).abs() < 1e-15);
        assert!((w[2] - 1.0 / 6.0).abs() < 1e-15);
        assert!(w[3].abs() < 1e-15);
    }

    #[test]
    fn test_linear_weights() {
        let w = spline_weights(1, 2.25).unwrap();
        assert!((w[0] - 0.75).abs() < 1e-15);
        assert!((w[1] - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_even_order_centering() {
        // Even orders center on the nearest sample: at x = 3.0 the centered
        // fraction is 0 and the quadratic weights are (1/8, 3/4, 1/8).
        let w = spline_weights(2, 3.0).unwrap();
        assert!((w[0] - 0.125).abs() < 1e-15);
        assert!((w[1] - 0.75).abs() < 1e-15);
        assert!((w[2] - 0.125).abs() < 1e-15);
    }

    #[test]
    fn test_unsupported_orders() {
        assert!(matches!(
            spline_weights(0, 0.5),
            Err(Error::UnsupportedOrder { order: 0, .. })
        ));
        assert!(matches!(
            spline_weights(6, 0.5),
            Err(Error::UnsupportedOrder { order: 6, .. })
        ));
    }
}
