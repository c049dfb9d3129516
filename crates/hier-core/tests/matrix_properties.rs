use hier_core::LoopContribution;
use proptest::prelude::*;

proptest! {
    #[test]
    fn eigenvalues_preserve_trace_and_determinant(
        s11 in -1.0e6f64..1.0e6,
        s12 in -1.0e6f64..1.0e6,
        s22 in -1.0e6f64..1.0e6,
    ) {
        let matrix = LoopContribution::new(s11, s12, s22);
        let [low, high] = matrix.eigenvalues();
        prop_assert!(low <= high);
        let scale = 1.0 + s11.abs() + s12.abs() + s22.abs();
        prop_assert!(((low + high) - (s11 + s22)).abs() <= 1e-9 * scale);
        let det = s11 * s22 - s12 * s12;
        prop_assert!((low * high - det).abs() <= 1e-9 * scale * scale);
    }

    #[test]
    fn addition_is_entrywise(a in -1.0e3f64..1.0e3, b in -1.0e3f64..1.0e3) {
        let sum = LoopContribution::new(a, b, a) + LoopContribution::new(b, a, -b);
        prop_assert_eq!(sum, LoopContribution::new(a + b, b + a, a - b));
        prop_assert_eq!(
            -sum * 2.0,
            LoopContribution::new(-2.0 * (a + b), -2.0 * (b + a), -2.0 * (a - b))
        );
    }
}

#[test]
fn swapping_exchanges_diagonal() {
    let matrix = LoopContribution::new(1.0, 2.0, 3.0);
    assert_eq!(matrix.swapped(), LoopContribution::new(3.0, 2.0, 1.0));
    assert_eq!(matrix.swapped().eigenvalues(), matrix.eigenvalues());
}
