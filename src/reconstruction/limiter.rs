//! Generalized minmod slope limiter.
//!
//! For three consecutive cell values `s1, s2, s3` the limited slope of the
//! middle cell is
//!
//! ```text
//! r     = (s2 - s1) / (s3 - s2)
//! phi   = max(0, min(theta·r, (1 + r) / 2, theta))
//! slope = phi · (s3 - s2) / 2
//! ```
//!
//! and zero where `s3 == s2`. `theta = 1` is the classic minmod limiter,
//! `theta = 2` the monotonized-central one.
//!
//! The slope is a half-cell increment: adding it to the cell value gives
//! the value on the upper face, subtracting it the value on the lower face.

use ndarray::{Array3, ArrayView3, ArrayViewMut3, Zip, s};

use crate::backend::{ExecutionBackend, zip_for_each};
use crate::config::KernelConfig;
use crate::grid::Domain;

/// Limiter function `phi(r)`, always in `[0, theta]`.
#[inline]
pub fn limiter_factor(r: f64, theta: f64) -> f64 {
    (theta * r).min(0.5 * (1.0 + r)).min(theta).max(0.0)
}

/// Limited half-cell slope of the middle of three values.
///
/// # Example
///
/// ```
/// use cu_swe::reconstruction::minmod_slope;
///
/// // linear data is reproduced exactly
/// assert_eq!(minmod_slope(1.0, 2.0, 3.0, 1.3), 0.5);
/// // a local extremum gets a flat reconstruction
/// assert_eq!(minmod_slope(1.0, 2.0, 1.0, 1.3), 0.0);
/// ```
#[inline]
pub fn minmod_slope(s1: f64, s2: f64, s3: f64, theta: f64) -> f64 {
    let denom = s3 - s2;
    if denom == 0.0 {
        return 0.0;
    }
    let r = (s2 - s1) / denom;
    limiter_factor(r, theta) * denom / 2.0
}

/// Limited slopes for three shifted views of the same data.
pub fn minmod_slopes(
    s1: ArrayView3<f64>,
    s2: ArrayView3<f64>,
    s3: ArrayView3<f64>,
    theta: f64,
    out: ArrayViewMut3<f64>,
    backend: ExecutionBackend,
) {
    zip_for_each!(
        backend,
        Zip::from(out).and(s1).and(s2).and(s3),
        |slp, &s1, &s2, &s3| *slp = minmod_slope(s1, s2, s3, theta)
    );
}

/// Slopes of every conserved field along x over interior rows and along
/// y over interior columns.
///
/// `slpx` has shape `(3, ny, nx + 2)` and covers the interior columns plus
/// one ghost column on each side; `slpy` is the transpose layout
/// `(3, ny + 2, nx)`.
pub fn compute_slopes(
    q: &Array3<f64>,
    slpx: &mut Array3<f64>,
    slpy: &mut Array3<f64>,
    domain: &Domain,
    config: &KernelConfig,
) {
    let (rows, cols) = (domain.rows(), domain.cols());
    let (xbg, xed) = (cols.start, cols.end);
    let (ybg, yed) = (rows.start, rows.end);

    minmod_slopes(
        q.slice(s![.., rows.clone(), xbg - 2..xed]),
        q.slice(s![.., rows.clone(), xbg - 1..xed + 1]),
        q.slice(s![.., rows, xbg..xed + 2]),
        config.theta,
        slpx.view_mut(),
        config.backend,
    );
    minmod_slopes(
        q.slice(s![.., ybg - 2..yed, cols.clone()]),
        q.slice(s![.., ybg - 1..yed + 1, cols.clone()]),
        q.slice(s![.., ybg..yed + 2, cols]),
        config.theta,
        slpy.view_mut(),
        config.backend,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Extent2D;
    use approx::assert_relative_eq;

    #[test]
    fn test_limiter_factor_bounds() {
        for theta in [1.0, 1.3, 2.0] {
            for r in [-10.0, -1.0, 0.0, 0.3, 1.0, 3.0, 100.0] {
                let phi = limiter_factor(r, theta);
                assert!((0.0..=theta).contains(&phi), "phi({r}) = {phi}");
            }
        }
        assert_eq!(limiter_factor(1.0, 1.3), 1.0);
        assert_eq!(limiter_factor(-0.5, 2.0), 0.0);
        assert_eq!(limiter_factor(100.0, 1.3), 1.3);
    }

    #[test]
    fn test_classic_minmod() {
        // theta = 1 picks the smaller one-sided difference
        assert_relative_eq!(minmod_slope(0.0, 1.0, 3.0, 1.0), 0.5);
        assert_relative_eq!(minmod_slope(0.0, 2.0, 3.0, 1.0), 0.5);
        assert_relative_eq!(minmod_slope(3.0, 1.0, 0.0, 1.0), -0.5);
    }

    #[test]
    fn test_flat_and_extremum() {
        assert_eq!(minmod_slope(2.0, 2.0, 2.0, 1.3), 0.0);
        assert_eq!(minmod_slope(1.0, 2.0, 2.0, 1.3), 0.0);
        assert_eq!(minmod_slope(3.0, 2.0, 3.0, 1.3), 0.0);
    }

    #[test]
    fn test_compute_slopes_on_ramp() {
        let domain = Domain::new(4, 5, Extent2D::new(0.0, 4.0, 0.0, 5.0)).unwrap();
        let (nyp, nxp) = domain.padded_shape();
        let q = Array3::from_shape_fn((3, nyp, nxp), |(_, j, i)| (j * nxp + i) as f64);
        let mut slpx = Array3::zeros((3, 5, 6));
        let mut slpy = Array3::zeros((3, 7, 4));
        compute_slopes(&q, &mut slpx, &mut slpy, &domain, &KernelConfig::default());
        assert!(slpx.iter().all(|&s| s == 0.5));
        assert!(slpy.iter().all(|&s| s == 4.0));
    }
}
