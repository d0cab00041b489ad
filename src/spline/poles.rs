//! Spline filter poles and normalization gain
//!
//! Pole values are the closed-form roots of each spline order's
//! characteristic polynomial, as derived in Unser's recursive B-spline
//! filtering papers and carried by SciPy's `ni_splines.c`. All poles lie
//! strictly inside the unit disk, which is what makes the causal/anticausal
//! recursions stable.

use crate::error::{Error, Result};

/// Poles for order 2: `sqrt(8) - 3`
const POLES_ORDER_2: [f64; 1] = [-0.171572875253809902396622551580603843];

/// Poles for order 3: `sqrt(3) - 2`
const POLES_ORDER_3: [f64; 1] = [-0.267949192431122706472553658494127633];

/// Poles for order 4:
/// `sqrt(664 - sqrt(438976)) + sqrt(304) - 19` and
/// `sqrt(664 + sqrt(438976)) - sqrt(304) - 19`
const POLES_ORDER_4: [f64; 2] = [
    -0.361341225900220177092212841325675255,
    -0.013725429297339121360331226939128204,
];

/// Poles for order 5:
/// `sqrt(67.5 - sqrt(4436.25)) + sqrt(26.25) - 6.5` and
/// `sqrt(67.5 + sqrt(4436.25)) - sqrt(26.25) - 6.5`
const POLES_ORDER_5: [f64; 2] = [
    -0.430575347099973791851434783493520110,
    -0.043096288203264653822712376822550182,
];

/// Filter poles for a spline order, in the order the prefilter applies them
///
/// The sequence order is significant: each pole's causal/anticausal pass
/// runs over the output of the previous pole's passes, and the passes do
/// not commute under finite precision.
///
/// Only orders 2-5 have poles; order 1 needs no prefilter and order 0/6+
/// are unsupported.
pub fn get_poles(order: usize) -> Result<&'static [f64]> {
    match order {
        2 => Ok(&POLES_ORDER_2),
        3 => Ok(&POLES_ORDER_3),
        4 => Ok(&POLES_ORDER_4),
        5 => Ok(&POLES_ORDER_5),
        _ => Err(Error::UnsupportedOrder {
            order,
            op: "get_poles",
        }),
    }
}

/// Normalization gain for a pole set: `prod (1 - z) * (1 - 1/z)`
///
/// Not applied by the generated filter itself; callers scale the input by
/// this gain before prefiltering (matching how the surrounding array layer
/// normalizes). Finite and nonzero for any poles with `|z| < 1`.
pub fn get_gain(poles: &[f64]) -> f64 {
    poles
        .iter()
        .map(|&z| (1.0 - z) * (1.0 - 1.0 / z))
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poles_match_closed_forms() {
        // Evaluating the radicals naively in f64 cancels a few trailing
        // digits (the order-4 outer subtraction alone loses ~3), so the
        // comparison tolerance sits above that, not at 1 ulp. The stored
        // constants themselves are correctly rounded.
        let tol = 1e-13;
        assert!((get_poles(2).unwrap()[0] - (8.0f64.sqrt() - 3.0)).abs() < tol);
        assert!((get_poles(3).unwrap()[0] - (3.0f64.sqrt() - 2.0)).abs() < tol);

        let p4 = get_poles(4).unwrap();
        let r = 438976.0f64.sqrt();
        assert!((p4[0] - ((664.0 - r).sqrt() + 304.0f64.sqrt() - 19.0)).abs() < tol);
        assert!((p4[1] - ((664.0 + r).sqrt() - 304.0f64.sqrt() - 19.0)).abs() < tol);

        let p5 = get_poles(5).unwrap();
        let r = 4436.25f64.sqrt();
        assert!((p5[0] - ((67.5 - r).sqrt() + 26.25f64.sqrt() - 6.5)).abs() < tol);
        assert!((p5[1] - ((67.5 + r).sqrt() - 26.25f64.sqrt() - 6.5)).abs() < tol);
    }

    #[test]
    fn test_poles_inside_unit_disk() {
        for order in 2..=5 {
            for &z in get_poles(order).unwrap() {
                assert!(z.abs() < 1.0, "pole {} of order {} unstable", z, order);
            }
        }
        assert_eq!(get_poles(2).unwrap().len(), 1);
        assert_eq!(get_poles(3).unwrap().len(), 1);
        assert_eq!(get_poles(4).unwrap().len(), 2);
        assert_eq!(get_poles(5).unwrap().len(), 2);
    }

    #[test]
    fn test_gain_is_direct_product() {
        for order in 2..=5 {
            let poles = get_poles(order).unwrap();
            let mut expected = 1.0;
            for &z in poles {
                expected *= (1.0 - z) * (1.0 - 1.0 / z);
            }
            assert_eq!(get_gain(poles), expected);
        }
    }

    #[test]
    fn test_unsupported_orders() {
        for order in [0, 1, 6, 100] {
            assert!(matches!(
                get_poles(order),
                Err(Error::UnsupportedOrder { .. })
            ));
        }
    }
}
