use std::convert::Infallible;

use approx::assert_relative_eq;

use super::{BracketStatus, Config, Point, Status, search};

fn start_of<F: Fn(f64) -> f64>(f: F) -> Point {
    Point::new(0.0, f(0.0))
}

#[test]
fn finds_minimum_of_shifted_parabola_with_defaults() {
    let f = |t: f64| (t - 3.0).powi(2);
    let config = Config::default();

    let solution = search(|t| Ok::<_, Infallible>(f(t)), start_of(f), &config).expect("infallible");

    assert_eq!(solution.bracket_status, BracketStatus::Found);
    assert!(solution.iters <= config.max_iters());
    assert_relative_eq!(solution.x, 3.0, epsilon = config.x_tol());
    assert_relative_eq!(solution.objective, f(solution.x));
}

#[test]
fn converges_with_room_to_iterate() {
    let f = |t: f64| (t - 3.0).powi(2);
    let config = Config::new(100, 1e-4, 50).unwrap();

    let solution = search(|t| Ok::<_, Infallible>(f(t)), start_of(f), &config).expect("infallible");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-4);
}

#[test]
fn finds_minimum_closer_than_unit_step() {
    // The unit trial step overshoots, so bracketing shrinks toward the start.
    let f = |t: f64| (t - 0.25).powi(2) + 1.0;
    let config = Config::new(100, 1e-6, 50).unwrap();

    let solution = search(|t| Ok::<_, Infallible>(f(t)), start_of(f), &config).expect("infallible");

    assert!(solution.is_converged());
    assert!(solution.bracket.max < 1.0);
    assert_relative_eq!(solution.x, 0.25, epsilon = 1e-5);
    assert_relative_eq!(solution.objective, 1.0, epsilon = 1e-9);
}

#[test]
fn finds_minimum_of_non_quadratic() {
    // f(t) = t⁴ - 8t has its minimum at t = 2^(1/3).
    let f = |t: f64| t.powi(4) - 8.0 * t;
    let config = Config::new(100, 1e-7, 50).unwrap();

    let solution = search(|t| Ok::<_, Infallible>(f(t)), start_of(f), &config).expect("infallible");

    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 2.0_f64.cbrt(), epsilon = 1e-6);
}

#[test]
fn starts_from_non_zero_point() {
    let f = |t: f64| (t - 7.5).powi(2);
    let start = Point::new(5.0, f(5.0));
    let config = Config::new(100, 1e-6, 50).unwrap();

    let solution = search(|t| Ok::<_, Infallible>(f(t)), start, &config).expect("infallible");

    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 7.5, epsilon = 1e-5);
}

#[test]
fn unbounded_objective_reports_bracket_cap() {
    let f = |t: f64| -t;
    let config = Config::new(10, 1e-4, 8).unwrap();

    let solution = search(|t| Ok::<_, Infallible>(f(t)), start_of(f), &config).expect("infallible");

    assert_eq!(solution.bracket_status, BracketStatus::MaxIters);
    assert!(!solution.is_converged());
    assert!(solution.x > 1.0);
}

#[test]
fn iteration_cap_is_not_an_error() {
    let f = |t: f64| (t - 3.0).powi(2) + (5.0 * t).sin();
    let config = Config::new(1, 1e-12, 50).unwrap();

    let solution = search(|t| Ok::<_, Infallible>(f(t)), start_of(f), &config).expect("infallible");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1);
    assert!(solution.objective <= f(solution.bracket.mid));
}

#[test]
fn counts_every_evaluation() {
    let f = |t: f64| (t - 3.0).powi(2);
    let config = Config::new(100, 1e-4, 50).unwrap();

    let mut evals = 0;
    let solution = search(
        |t| {
            evals += 1;
            Ok::<_, Infallible>(f(t))
        },
        start_of(f),
        &config,
    )
    .expect("infallible");

    // Bracketing needs at least two evaluations, Brent one to seed and one per iteration.
    assert!(evals >= 2 + 1 + solution.iters);
}

#[test]
fn propagates_objective_errors() {
    let config = Config::default();

    let result = search(
        |t: f64| {
            if t > 2.0 {
                Err("diverged")
            } else {
                Ok(-t)
            }
        },
        Point::new(0.0, 0.0),
        &config,
    );

    assert_eq!(result, Err("diverged"));
}
