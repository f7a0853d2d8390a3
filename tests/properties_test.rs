use complexn::prelude::*;
use complexn::util::{ApproxEq, NumMargin};

const MARGIN: NumMargin<f64> = NumMargin {
    epsilon: 1e-9,
    relative: 1e-9,
    ulps: 10,
};

fn quadrants() -> Vec<ComplexNumber> {
    vec![
        ComplexNumber::new(1.2, -4.1),
        ComplexNumber::new(3.4, 2.3),
        ComplexNumber::new(-0.75, 0.5),
        ComplexNumber::new(-0.0025, -800.0),
        ComplexNumber::new(5.0, 0.0),
        ComplexNumber::new(-5.0, 0.0),
        ComplexNumber::new(0.0, 3.0),
        ComplexNumber::new(0.0, -3.0),
    ]
}

#[test]
fn test_conjugate_involution() {
    for z in quadrants() {
        assert_eq!(z.conjugate().conjugate(), z);
    }
}

#[test]
fn test_reciprocal() {
    for z in quadrants() {
        (z * z.reciprocal()).assert_approx_eq(&ComplexNumber::ONE, MARGIN, "reciprocal", "z");
    }
    assert_eq!(ComplexNumber::ZERO.reciprocal(), ComplexNumber::ZERO);
}

#[test]
fn test_sqrt_squares_back() {
    for z in quadrants() {
        let w = z.sqrt();
        (w * w).assert_approx_eq(&z, MARGIN, "sqrt", "z");
        assert!(w.re() >= 0.0);
    }
    assert_eq!(ComplexNumber::new(-1.0, 0.0).sqrt(), ComplexNumber::new(0.0, 1.0));
}

#[test]
fn test_magnitude() {
    assert_eq!(ComplexNumber::new(3.0, 4.0).magnitude(), 5.0);
    let h = stable_hypot(1e300, 1e300);
    assert!(h.is_finite());
    h.assert_approx_eq(&(std::f64::consts::SQRT_2 * 1e300), MARGIN, "stable_hypot", "1e300");
}

#[test]
fn test_identities() {
    assert_eq!(ComplexNumber::ONE.ln(), ComplexNumber::ZERO);
    assert_eq!(
        ComplexNumber::ZERO.pow(&ComplexNumber::ZERO),
        ComplexNumber::new(1.0, 0.0)
    );
    assert_eq!(ComplexNumber::ONE.atanh(), ComplexNumber::new(f64::INFINITY, 0.0));
    assert_eq!(
        ComplexNumber::new(-1.0, 0.0).atanh(),
        ComplexNumber::new(f64::NEG_INFINITY, 0.0)
    );
    for z in quadrants().into_iter().filter(|z| z.im().abs() < 10.0) {
        let (s, c) = (z.sin(), z.cos());
        (s * s + c * c).assert_approx_eq(&ComplexNumber::ONE, MARGIN, "sin²+cos²", "z");
    }
}

#[test]
fn test_gamma_factorials() {
    let mut fact = 1.0;
    for n in 1..=20 {
        assert_eq!(
            ComplexNumber::from(n as f64).gamma(),
            ComplexNumber::from(fact)
        );
        fact *= n as f64;
    }
    assert_eq!(ComplexNumber::from(5).gamma(), ComplexNumber::from(24));
}

#[test]
fn test_real_helpers_cross_into_complex() {
    use complexn::real;

    assert_eq!(real::sqrt(4.0), RealOrComplex::Real(2.0));
    assert_eq!(
        real::sqrt(-4.0).into_complex(),
        ComplexNumber::new(-4.0, 0.0).sqrt()
    );
    assert!(!real::asin(2.0).is_real());
    assert_eq!(real::ln(-1.0).into_complex(), ComplexNumber::new(-1.0, 0.0).ln());
}

#[test]
fn test_serde_round_trip() {
    for z in quadrants() {
        let json = serde_json::to_string(&z).unwrap();
        let back: ComplexNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, z);
        assert_eq!(back.magnitude(), z.magnitude());
    }
}
