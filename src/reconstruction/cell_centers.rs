//! Cell-centered primitive variables with dry-state snapping.

use ndarray::{Array2, Array3, ArrayViewMut1, Axis, Zip};

use crate::backend::zip_for_each;
use crate::config::KernelConfig;

/// Convert one cell from `(w, hu, hv)` to `(h, u, v)`.
///
/// - `h < tol`: the cell is emptied, `p = 0` and `q = (b, 0, 0)`
/// - `h < drytol`: velocities and momenta are zeroed, depth kept
/// - otherwise `u = hu / h`, `v = hv / h`
///
/// Applying it twice gives the same result as applying it once.
#[inline]
pub fn cell_primitives(
    mut q: ArrayViewMut1<f64>,
    mut p: ArrayViewMut1<f64>,
    b: f64,
    tol: f64,
    drytol: f64,
) {
    let h = q[0] - b;
    if h < tol {
        p.fill(0.0);
        q[0] = b;
        q[1] = 0.0;
        q[2] = 0.0;
    } else if h < drytol {
        p[0] = h;
        p[1] = 0.0;
        p[2] = 0.0;
        q[1] = 0.0;
        q[2] = 0.0;
    } else {
        p[0] = h;
        p[1] = q[1] / h;
        p[2] = q[2] / h;
    }
}

/// Recompute `p` from `q` over the whole padded array, ghosts included.
///
/// `q` is modified where a cell is dry or nearly dry.
pub fn reconstruct_cell_centers(
    q: &mut Array3<f64>,
    p: &mut Array3<f64>,
    b: &Array2<f64>,
    config: &KernelConfig,
) {
    let (tol, drytol) = (config.tol, config.drytol);
    zip_for_each!(
        config.backend,
        Zip::from(q.lanes_mut(Axis(0)))
            .and(p.lanes_mut(Axis(0)))
            .and(b),
        |q, p, &b| cell_primitives(q, p, b, tol, drytol)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn run(q0: [f64; 3], b: f64) -> ([f64; 3], [f64; 3]) {
        let config = KernelConfig::new(9.81).with_tol(1e-6).with_drytol(1e-3);
        let mut q = Array3::from_shape_fn((3, 1, 1), |(k, _, _)| q0[k]);
        let mut p = Array3::zeros((3, 1, 1));
        let b = Array2::from_elem((1, 1), b);
        reconstruct_cell_centers(&mut q, &mut p, &b, &config);
        (
            [q[[0, 0, 0]], q[[1, 0, 0]], q[[2, 0, 0]]],
            [p[[0, 0, 0]], p[[1, 0, 0]], p[[2, 0, 0]]],
        )
    }

    #[test]
    fn test_wet_cell() {
        let (q, p) = run([3.0, 4.0, -2.0], 1.0);
        assert_eq!(q, [3.0, 4.0, -2.0]);
        assert_relative_eq!(p[0], 2.0);
        assert_relative_eq!(p[1], 2.0);
        assert_relative_eq!(p[2], -1.0);
    }

    #[test]
    fn test_nearly_dry_cell_keeps_depth() {
        let (q, p) = run([1.0005, 0.3, 0.1], 1.0);
        assert_relative_eq!(q[0], 1.0005);
        assert_relative_eq!(p[0], 0.0005, epsilon = 1e-12);
        assert_eq!([q[1], q[2], p[1], p[2]], [0.0; 4]);
    }

    #[test]
    fn test_negative_depth_snaps_to_bed() {
        let (q, p) = run([0.5, 1.0, 1.0], 1.0);
        assert_eq!(q, [1.0, 0.0, 0.0]);
        assert_eq!(p, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_idempotent() {
        let config = KernelConfig::new(9.81).with_drytol(0.1);
        let mut q = array![[[1.0, 0.05, 2.0]], [[0.3, 0.3, 0.3]], [[0.1, 0.1, 0.1]]];
        let mut p = Array3::zeros((3, 1, 3));
        let b = Array2::zeros((1, 3));
        reconstruct_cell_centers(&mut q, &mut p, &b, &config);
        let (q1, p1) = (q.clone(), p.clone());
        reconstruct_cell_centers(&mut q, &mut p, &b, &config);
        assert_eq!(q, q1);
        assert_eq!(p, p1);
    }
}
