//! End-to-end checks of the public interpolation API.
//!
//! Exercises the reference forex series and the exact polynomial path the
//! way a presentation layer would call them.

use std::mem::discriminant;

use approx::assert_relative_eq;
use proptest::prelude::*;

use lagrange_core::prelude::*;

// ============================================================================
// Reference series
// ============================================================================

#[test]
fn reference_first_sample_is_reproduced() {
    let rate = interpolate_numeric(&reference_series(), "2002-01-01").unwrap();
    assert_relative_eq!(rate, 26.5850, epsilon = 1e-9);
}

#[test]
fn reference_every_sample_is_reproduced() {
    let series = reference_series();
    for sample in &series {
        let rate = interpolate_numeric(&series, &sample.date.to_string()).unwrap();
        assert_relative_eq!(rate, sample.rate_f64(), epsilon = 1e-9);
    }
}

#[test]
fn reference_malformed_dates() {
    let series = reference_series();
    for bad in ["2002/01/01", "January 2002", "2002-02-30", "", " 2002-01-01"] {
        assert!(
            matches!(
                interpolate_numeric(&series, bad),
                Err(LagrangeError::InvalidDateFormat { .. })
            ),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn reference_mid_month_is_finite() {
    let quote = interpolate_rate(&reference_series(), "2002-01-15").unwrap();
    assert_eq!(quote.offset, 14);
    assert!(quote.rate.is_finite());
    assert!(quote.to_string().starts_with("Interpolated exchange rate for 2002-01-15: "));
}

#[test]
fn custom_index_matches_shifted_axis() {
    // Shifting the reference date shifts every offset equally; the
    // interpolant at the sample dates is unchanged.
    let series = reference_series();
    let shifted = DateIndex::new(Date::from_ymd(2003, 1, 1).unwrap());
    let interp = SeriesInterpolator::with_index(&series, shifted).unwrap();

    let quote = interp.quote("2003-06-01").unwrap();
    assert_eq!(quote.offset, 151);
    assert_relative_eq!(quote.rate, 35.4584, epsilon = 1e-6);
}

// ============================================================================
// Exact polynomial path
// ============================================================================

#[test]
fn quadratic_end_to_end() {
    let poly = build_polynomial(&[("0", "1"), ("1", "2"), ("2", "5")]).unwrap();
    assert_eq!(render_polynomial(&poly), "x^2 + x + 1");
    assert_eq!(evaluate_polynomial(&poly, "3").unwrap().to_string(), "13");
}

#[test]
fn single_point_is_constant_everywhere() {
    let poly = build_polynomial(&[("7/3", "-2.5")]).unwrap();
    assert_eq!(poly.degree(), Some(0));
    for x in ["0", "-100", "1/7", "1e3"] {
        assert_eq!(evaluate_polynomial(&poly, x).unwrap().to_string(), "-5/2");
    }
}

#[test]
fn long_literals_are_interpolated_exactly() {
    let points = [
        ("1", "0.12345678901234567890123456789012345"),
        ("1.00000000000000000000000000001", "1e30"),
        ("-1e-30", "3"),
    ];
    let poly = build_polynomial(&points).unwrap();
    assert_eq!(poly.degree(), Some(2));
    for (x, y) in points {
        let expected = lagrange_math::rational::parse_rational(y).unwrap();
        assert_eq!(evaluate_polynomial(&poly, x).unwrap(), expected);
    }
}

#[test]
fn duplicate_abscissa_never_yields_polynomial() {
    let result = build_polynomial(&[("0.5", "1"), ("2", "3"), ("1/2", "4")]);
    assert!(matches!(result, Err(LagrangeError::DuplicateAbscissa { .. })));
}

#[test]
fn parse_error_names_token() {
    let result = build_polynomial(&[("0", "1"), ("1", "abc")]);
    assert_eq!(
        result,
        Err(LagrangeError::ParseError {
            token: "abc".to_string()
        })
    );
}

fn rational_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (-50i32..50).prop_map(|n| n.to_string()),
        (-50i32..50, 1u32..9).prop_map(|(n, d)| format!("{n}/{d}")),
        (-500i32..500).prop_map(|n| format!("{}", f64::from(n) / 100.0)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn evaluation_passes_through_inputs(
        raw in prop::collection::vec((rational_text(), rational_text()), 1..6)
    ) {
        // Random text may repeat an abscissa; only distinct sets build.
        match build_polynomial(&raw) {
            Ok(poly) => {
                for (x, y) in &raw {
                    let expected = lagrange_math::rational::parse_rational(y).unwrap();
                    prop_assert_eq!(evaluate_polynomial(&poly, x).unwrap(), expected);
                }
            }
            Err(err) => prop_assert!(matches!(err, LagrangeError::DuplicateAbscissa { .. }), "unexpected error: {:?}", err),
        }
    }

    #[test]
    fn permutation_gives_same_polynomial(
        raw in prop::collection::vec((rational_text(), rational_text()), 1..6)
    ) {
        let mut reversed = raw.clone();
        reversed.reverse();
        match (build_polynomial(&raw), build_polynomial(&reversed)) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            // The reported duplicate may differ with order; compare the kind.
            (Err(a), Err(b)) => prop_assert_eq!(discriminant(&a), discriminant(&b)),
            (a, b) => prop_assert!(false, "order changed the outcome: {:?} vs {:?}", a, b),
        }
    }
}
