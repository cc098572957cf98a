//! Property tests for the interpolation entry point.
//!
//! Pillars are generated as strictly increasing x values with non-zero y
//! values, so every method (including log-linear) accepts them.

use cfhedge_math::prelude::*;
use proptest::prelude::*;

fn pillars() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    proptest::collection::vec((0.01f64..3.0, 0.05f64..1.5), 2..12).prop_map(|steps| {
        let mut x = 0.0;
        let mut xs = Vec::with_capacity(steps.len());
        let mut ys = Vec::with_capacity(steps.len());
        for (dx, y) in steps {
            x += dx;
            xs.push(x);
            ys.push(y);
        }
        (xs, ys)
    })
}

const METHODS: [InterpolationMethod; 3] = [
    InterpolationMethod::Linear,
    InterpolationMethod::Exponential,
    InterpolationMethod::Flat,
];

proptest! {
    #[test]
    fn prop_round_trip_at_pillars((xs, ys) in pillars()) {
        for method in METHODS {
            for (k, x) in xs.iter().enumerate() {
                let v = interpolate(&xs, &ys, *x, method, Extrapolation::Flat).unwrap();
                prop_assert_eq!(v, ys[k]);
            }
        }
    }

    #[test]
    fn prop_flat_extrapolation_holds_last((xs, ys) in pillars(), beyond in 0.001f64..50.0) {
        let xi = xs[xs.len() - 1] + beyond;
        for method in METHODS {
            let v = interpolate(&xs, &ys, xi, method, Extrapolation::Flat).unwrap();
            prop_assert_eq!(v, ys[ys.len() - 1]);
        }
    }

    #[test]
    fn prop_interior_within_neighbours((xs, ys) in pillars(), w in 0.0f64..1.0) {
        let i = 0;
        let xi = xs[i] + w * (xs[i + 1] - xs[i]);
        let (lo, hi) = (ys[i].min(ys[i + 1]), ys[i].max(ys[i + 1]));
        for method in METHODS {
            let v = interpolate(&xs, &ys, xi, method, Extrapolation::Flat).unwrap();
            prop_assert!(v >= lo - 1e-12 && v <= hi + 1e-12, "{} gave {}", method, v);
        }
    }
}

#[test]
fn unknown_method_name_is_rejected() {
    let err = "SPLINE".parse::<InterpolationMethod>().unwrap_err();
    assert_eq!(err.kind(), cfhedge_core::ErrorKind::UnsupportedMethod);
}
