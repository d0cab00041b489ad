//! Integration tests for the B-spline weight evaluator

use splinr::spline::spline_weights;

// ============================================================================
// Partition of unity
// ============================================================================

#[test]
fn test_weights_partition_of_unity() {
    let offsets = [
        -3.7, -1.0, -0.5, 0.0, 0.1, 0.25, 1.0 / 3.0, 0.5, 0.75, 0.999, 1.0, 2.5, 42.125,
    ];
    for order in 1..=5 {
        for &x in &offsets {
            let w = spline_weights(order, x).unwrap();
            assert_eq!(w.len(), order + 1);
            let sum: f64 = w.iter().sum();
            assert!(
                (sum - 1.0).abs() <= f64::EPSILON,
                "order {} x {}: sum {}",
                order,
                x,
                sum
            );
        }
    }
}

#[test]
fn test_weights_nonnegative_in_generating_interval() {
    // B-spline basis samples are nonnegative.
    for order in 1..=5 {
        for k in 0..=20 {
            let x = k as f64 / 20.0;
            let w = spline_weights(order, x).unwrap();
            for (j, &v) in w.iter().enumerate() {
                assert!(v >= -1e-15, "order {} x {} w[{}] = {}", order, x, j, v);
            }
        }
    }
}

// ============================================================================
// Known basis values
// ============================================================================

#[test]
fn test_cubic_basis_at_knots() {
    // At integer coordinates the cubic basis samples are (1, 4, 1, 0)/6.
    for t in [0.0, 1.0, 5.0, -2.0] {
        let w = spline_weights(3, t).unwrap();
        assert!((w[0] - 1.0 / 6.0).abs() < 1e-15);
        assert!((w[1] - 4.0 / 6.0).abs() < 1e-15);
        assert!((w[2] - 1.0 / 6.0).abs() < 1e-15);
        assert!(w[3].abs() < 1e-15);
    }
}

#[test]
fn test_cubic_symmetry_at_half() {
    // Halfway between knots the cubic weights are symmetric: (1, 23, 23, 1)/48.
    let w = spline_weights(3, 0.5).unwrap();
    assert!((w[0] - 1.0 / 48.0).abs() < 1e-15);
    assert!((w[1] - 23.0 / 48.0).abs() < 1e-15);
    assert!((w[2] - 23.0 / 48.0).abs() < 1e-12);
    assert!((w[3] - 1.0 / 48.0).abs() < 1e-12);
}

#[test]
fn test_quintic_basis_at_knots() {
    // Quintic basis samples at integers: (1, 26, 66, 26, 1, 0)/120.
    let w = spline_weights(5, 3.0).unwrap();
    assert!((w[0] - 1.0 / 120.0).abs() < 1e-12);
    assert!((w[1] - 26.0 / 120.0).abs() < 1e-12);
    assert!((w[2] - 66.0 / 120.0).abs() < 1e-12);
    assert!((w[3] - 26.0 / 120.0).abs() < 1e-12);
    assert!((w[4] - 1.0 / 120.0).abs() < 1e-12);
    assert!(w[5].abs() < 1e-12);
}

#[test]
fn test_linear_weights_are_fractions() {
    let w = spline_weights(1, 4.125).unwrap();
    assert!((w[0] - 0.875).abs() < 1e-15);
    assert!((w[1] - 0.125).abs() < 1e-15);
}

#[test]
fn test_only_fractional_part_matters() {
    for order in 1..=5 {
        let a = spline_weights(order, 0.3).unwrap();
        let b = spline_weights(order, 7.3).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-12, "order {}: {} vs {}", order, x, y);
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unsupported_orders_rejected() {
    for order in [0, 6, 17] {
        assert!(matches!(
            spline_weights(order, 0.5),
            Err(splinr::error::Error::UnsupportedOrder { .. })
        ));
    }
}
