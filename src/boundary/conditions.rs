//! Ghost-layer fillers.
//!
//! Every condition is a pure function of the two interior layers next to
//! a side. `ghosts` is ordered `[inner, outer]` (inner touches the
//! interior) and `interior` is ordered `[first, second]` moving away from
//! the boundary.

use ndarray::{ArrayView1, ArrayViewMut1, Zip};

/// Set both ghost layers to `value`.
pub fn constant(ghosts: [ArrayViewMut1<f64>; 2], value: f64) {
    for mut ghost in ghosts {
        ghost.fill(value);
    }
}

/// Continue the trend of the two interior cells:
/// `g1 = c0 + (c0 - c1)`, `g2 = g1 + (c0 - c1)`.
pub fn linear_extrapolation(ghosts: [ArrayViewMut1<f64>; 2], interior: [ArrayView1<f64>; 2]) {
    let [inner, outer] = ghosts;
    let [first, second] = interior;
    Zip::from(inner)
        .and(outer)
        .and(first)
        .and(second)
        .for_each(|g1, g2, &c0, &c1| {
            let delta = c0 - c1;
            *g1 = c0 + delta;
            *g2 = *g1 + delta;
        });
}

/// Mirror the interior across the boundary, multiplied by `sign`.
///
/// `sign = 1` is a symmetric (zero-gradient) fill, `sign = -1` makes the
/// field vanish on the boundary face.
pub fn mirror(ghosts: [ArrayViewMut1<f64>; 2], interior: [ArrayView1<f64>; 2], sign: f64) {
    let [inner, outer] = ghosts;
    let [first, second] = interior;
    Zip::from(inner)
        .and(outer)
        .and(first)
        .and(second)
        .for_each(|g1, g2, &c0, &c1| {
            *g1 = sign * c0;
            *g2 = sign * c1;
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, array};

    fn run<F>(first: Array1<f64>, second: Array1<f64>, fill: F) -> (Array1<f64>, Array1<f64>)
    where
        F: FnOnce([ArrayViewMut1<f64>; 2], [ArrayView1<f64>; 2]),
    {
        let mut g1 = Array1::zeros(first.len());
        let mut g2 = Array1::zeros(first.len());
        fill([g1.view_mut(), g2.view_mut()], [first.view(), second.view()]);
        (g1, g2)
    }

    #[test]
    fn test_constant() {
        let (g1, g2) = run(array![1.0, 2.0], array![3.0, 4.0], |g, _| constant(g, 7.5));
        assert_eq!(g1, array![7.5, 7.5]);
        assert_eq!(g2, array![7.5, 7.5]);
    }

    #[test]
    fn test_linear_extrapolation() {
        let (g1, g2) = run(array![1.0, 5.0], array![2.0, 5.0], linear_extrapolation);
        assert_eq!(g1, array![0.0, 5.0]);
        assert_eq!(g2, array![-1.0, 5.0]);
    }

    #[test]
    fn test_mirror() {
        let (g1, g2) = run(array![1.0], array![2.0], |g, c| mirror(g, c, -1.0));
        assert_eq!(g1, array![-1.0]);
        assert_eq!(g2, array![-2.0]);
    }
}
