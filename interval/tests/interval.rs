//! Tests of the public interval API: parsing, display and comparison.

use std::cmp::Ordering::{self, *};

use interval::{Interval, IntervalError};
use rand::{Rng, SeedableRng, rngs::SmallRng};

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn interval(lower: f64, upper: f64, lower_inclusive: bool, upper_inclusive: bool) -> Interval {
    let mut interval = Interval::new();
    interval
        .set_lower(lower)
        .unwrap()
        .set_upper(upper)
        .unwrap()
        .set_lower_inclusive(lower_inclusive)
        .set_upper_inclusive(upper_inclusive);
    interval
}

/// Random endpoint, sometimes infinite, sometimes an integer.
fn random_endpoint(rng: &mut SmallRng) -> f64 {
    match rng.random_range(0..10) {
        0 => f64::NEG_INFINITY,
        1 => f64::INFINITY,
        2..=5 => rng.random_range(-100..100) as f64,
        _ => rng.random_range(-1e6..1e6),
    }
}

#[test]
fn construct() {
    init_logs();
    let interval: Interval = "[0, 1]".parse().unwrap();
    assert_eq!(interval.lower(), Some(0.0));
    assert_eq!(interval.upper(), Some(1.0));
    assert!(interval.is_lower_inclusive());
    assert!(interval.is_upper_inclusive());

    assert_eq!(Interval::try_from("[0, 1]").unwrap(), interval);
}

#[test]
fn construct_invalid() {
    init_logs();
    assert_eq!(
        "foo".parse::<Interval>(),
        Err(IntervalError::Malformed {
            input: "foo".to_string()
        })
    );
    assert_eq!(
        "[999, 1]".parse::<Interval>(),
        Err(IntervalError::OutOfOrder {
            lower: 999.0,
            upper: 1.0
        })
    );
    assert_eq!(
        "[0, 0)".parse::<Interval>(),
        Err(IntervalError::MismatchedBoundaries { endpoint: 0.0 })
    );
    assert!("[INF, -INF]".parse::<Interval>().is_err());
    assert!("(INF, INF]".parse::<Interval>().is_err());
}

#[test]
fn equal_endpoints() {
    init_logs();
    for text in ["[0, 0]", "(0, 0)", "[-INF, -INF]", "(INF, INF)", "[-0, 0]"] {
        let interval: Interval = text.parse().unwrap();
        assert_eq!(interval.lower(), interval.upper(), "{text}");
    }
}

#[test]
fn infinities() {
    init_logs();
    let interval: Interval = "[-INF, INF]".parse().unwrap();
    assert_eq!(interval.lower(), Some(f64::NEG_INFINITY));
    assert_eq!(interval.upper(), Some(f64::INFINITY));
    assert!(interval.is_lower_inclusive());
    assert!(interval.is_upper_inclusive());
    assert_eq!(interval.to_string(), "[-INF, INF]");

    for x in [f64::MIN, -1.0, 0.0, f64::MAX, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(interval.compare(x).unwrap(), Equal);
    }

    let interval: Interval = "(-INF, 0]".parse().unwrap();
    assert_eq!(interval.compare(f64::NEG_INFINITY).unwrap(), Less);
    assert_eq!(interval.compare(f64::MIN).unwrap(), Equal);
    assert_eq!(interval.compare(0).unwrap(), Equal);
    assert_eq!(interval.compare(f64::INFINITY).unwrap(), Greater);
}

#[test]
fn chained_setters() {
    let mut interval = Interval::new();
    interval
        .set_lower_inclusive(false)
        .set_lower(1)
        .unwrap()
        .set_upper(2)
        .unwrap()
        .set_upper_inclusive(true);
    assert_eq!(interval.to_string(), "(1, 2]");

    interval.lower_inclusive().upper_exclusive().set_separator("; ");
    assert_eq!(interval.to_string(), "[1; 2)");
}

#[test]
fn invalid_bounds_keep_state() {
    let mut interval = interval(0.0, 1.0, true, false);
    let before = interval.clone();
    for value in ["foo", "", "INF", "1..2", "nan"] {
        assert!(interval.set_lower(value).unwrap_err().is_invalid_argument());
        assert!(interval.set_upper(value).unwrap_err().is_invalid_argument());
        assert_eq!(interval, before);
    }
    assert!(interval.compare("foo").is_err());
    assert!(interval.compare(f64::NAN).is_err());
}

#[test]
fn custom_separator() {
    init_logs();
    let mut interval = Interval::new();
    interval.set_separator("..");
    assert!(interval.parse("[0, 1]").is_err());

    interval.parse("(-2..3.5]").unwrap();
    assert_eq!(interval.bounds(), (Some(-2.0), Some(3.5)));
    assert_eq!(interval.to_string(), "(-2..3.5]");

    // the separator is read at each call
    interval.set_separator(" to ");
    interval.parse("[-INF to 0)").unwrap();
    assert_eq!(interval.to_string(), "[-INF to 0)");
}

#[test]
fn boundary_comparisons() {
    let cases: [(bool, Ordering); 2] = [(false, Less), (true, Equal)];
    for (inclusive, expected) in cases {
        let mut interval = interval(-3.0, 7.0, false, false);
        interval.set_lower_inclusive(inclusive);
        assert_eq!(interval.compare(-3).unwrap(), expected);
    }
    let cases: [(bool, Ordering); 2] = [(false, Greater), (true, Equal)];
    for (inclusive, expected) in cases {
        let mut interval = interval(-3.0, 7.0, false, false);
        interval.set_upper_inclusive(inclusive);
        assert_eq!(interval.compare(7).unwrap(), expected);
    }
}

#[test]
fn round_trip() {
    init_logs();
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..1000 {
        let (mut a, mut b) = (random_endpoint(&mut rng), random_endpoint(&mut rng));
        if b < a {
            std::mem::swap(&mut a, &mut b);
        }
        let lower_inclusive = rng.random_bool(0.5);
        let upper_inclusive = if a == b { lower_inclusive } else { rng.random_bool(0.5) };

        let expected = interval(a, b, lower_inclusive, upper_inclusive);
        let text = expected.to_string();
        let parsed: Interval = text.parse().unwrap_or_else(|e| panic!("{text}: {e}"));
        assert_eq!(parsed, expected, "{text}");
    }
}

#[test]
fn partition() {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..200 {
        let a = rng.random_range(-1000.0..1000.0);
        let b = a + rng.random_range(1.0..1000.0);
        let lower_inclusive = rng.random_bool(0.5);
        let upper_inclusive = rng.random_bool(0.5);
        let interval = interval(a, b, lower_inclusive, upper_inclusive);

        assert_eq!(interval.compare(a - 0.5).unwrap(), Less);
        assert_eq!(interval.compare(b + 0.5).unwrap(), Greater);
        assert_eq!(interval.compare((a + b) / 2.0).unwrap(), Equal);
        assert_eq!(interval.contains(a).unwrap(), lower_inclusive);
        assert_eq!(interval.contains(b).unwrap(), upper_inclusive);

        // comparisons are monotonic along the real line
        let mut points: Vec<f64> = (0..20).map(|_| rng.random_range(a - 10.0..b + 10.0)).collect();
        points.extend([a, b]);
        points.sort_by(f64::total_cmp);
        let orderings: Vec<Ordering> = points.iter().map(|x| interval.compare(x).unwrap()).collect();
        assert!(orderings.windows(2).all(|w| w[0] <= w[1]), "{interval}: {orderings:?}");
    }
}
