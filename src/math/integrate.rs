//! Sampling and fixed-count quadrature on uniform grids.
//!
//! Both rules take `(f, a, b, n)` where `n` is the number of samples on
//! `[a, b]` with both endpoints included, so they can be compared on exactly
//! the same abscissae:
//!
//! - [`sample_sum`]: `Σ f(x_i) · dx` over all `n` samples. This counts one
//!   more rectangle than the interval holds, which is what the dark-energy
//!   reference integral does.
//! - [`trapezoid`]: the composite trapezoidal rule.
//!
//! Numerical notes:
//! - `n` is independent of `b − a`; the step grows with the interval.
//! - A degenerate interval (`a == b`) gives `dx = 0` and therefore `0`.

/// `n` evenly spaced points on `[start, stop]`, both endpoints included.
///
/// Points are computed as `start + i·step` and the last one is pinned to
/// `stop` so the grid never overshoots.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as f64 - 1.0);
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Sum of `f` over all `n` samples of `[a, b]`, times the sample spacing.
///
/// Returns `0.0` when fewer than two samples are requested (no spacing).
pub fn sample_sum<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let xs = linspace(a, b, n);
    let dx = xs[1] - xs[0];
    let sum: f64 = xs.iter().map(|&x| f(x)).sum();
    sum * dx
}

/// Composite trapezoidal rule with `n` samples of `[a, b]`.
///
/// Returns `0.0` when fewer than two samples are requested.
pub fn trapezoid<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let xs = linspace(a, b, n);
    let dx = xs[1] - xs[0];
    let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
    let interior: f64 = ys[1..n - 1].iter().sum();
    dx * (0.5 * (ys[0] + ys[n - 1]) + interior)
}
