//! One-sided local wave speeds.
//!
//! For a face with depth/normal velocity `(hm, um)` on the minus side and
//! `(hp, up)` on the plus side:
//!
//! a+ = max(up + sqrt(g·hp), um + sqrt(g·hm), 0)
//! a- = min(up - sqrt(g·hp), um - sqrt(g·hm), 0)
//!
//! so `a- <= 0 <= a+` always holds.

use ndarray::{Axis, Zip};

use crate::backend::{ExecutionBackend, zip_for_each};
use crate::grid::GridAxis;
use crate::state::{FaceQuantities, FaceTwoSide};

/// Index of the face-normal velocity in the primitive arrays.
#[inline]
pub fn normal_component(axis: GridAxis) -> usize {
    match axis {
        GridAxis::X => 1,
        GridAxis::Y => 2,
    }
}

/// Celerity `sqrt(g·h)`, zero for non-positive depths.
#[inline]
pub fn celerity(h: f64, g: f64) -> f64 {
    (g * h.max(0.0)).sqrt()
}

/// Local speed bounds `(a_minus, a_plus)` for one face.
///
/// # Example
///
/// ```
/// use cu_swe::flux::wave_speed_bounds;
///
/// let (am, ap) = wave_speed_bounds(1.0, 0.0, 1.0, 0.0, 9.81);
/// assert!((ap - 9.81_f64.sqrt()).abs() < 1e-12);
/// assert_eq!(am, -ap);
/// ```
#[inline]
pub fn wave_speed_bounds(hm: f64, um: f64, hp: f64, up: f64, g: f64) -> (f64, f64) {
    let cm = celerity(hm, g);
    let cp = celerity(hp, g);
    let a_plus = (up + cp).max(um + cm).max(0.0);
    let a_minus = (up - cp).min(um - cm).min(0.0);
    (a_minus, a_plus)
}

/// Local speeds on one family of faces.
///
/// `a_minus` goes into `minus.a`, `a_plus` into `plus.a`.
pub fn local_speed(face: &mut FaceTwoSide, axis: GridAxis, gravity: f64, backend: ExecutionBackend) {
    let k = normal_component(axis);
    let FaceTwoSide { minus, plus, .. } = face;
    zip_for_each!(
        backend,
        Zip::from(&mut minus.a)
            .and(&mut plus.a)
            .and(minus.p.index_axis(Axis(0), 0))
            .and(minus.p.index_axis(Axis(0), k))
            .and(plus.p.index_axis(Axis(0), 0))
            .and(plus.p.index_axis(Axis(0), k)),
        |am, ap, &hm, &um, &hp, &up| (*am, *ap) = wave_speed_bounds(hm, um, hp, up, gravity)
    );
}

/// Local speeds on the faces of both axes.
pub fn compute_local_speeds(face: &mut FaceQuantities, gravity: f64, backend: ExecutionBackend) {
    local_speed(&mut face.x, GridAxis::X, gravity, backend);
    local_speed(&mut face.y, GridAxis::Y, gravity, backend);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_straddle_zero() {
        // supercritical flow to the right
        let (am, ap) = wave_speed_bounds(1.0, 10.0, 1.0, 10.0, 9.81);
        assert_eq!(am, 0.0);
        assert_relative_eq!(ap, 10.0 + 9.81_f64.sqrt());

        let (am, ap) = wave_speed_bounds(1.0, -10.0, 1.0, -10.0, 9.81);
        assert_relative_eq!(am, -10.0 - 9.81_f64.sqrt());
        assert_eq!(ap, 0.0);
    }

    #[test]
    fn test_dry_faces_give_zero() {
        assert_eq!(wave_speed_bounds(0.0, 0.0, 0.0, 0.0, 9.81), (0.0, 0.0));
        assert_eq!(celerity(-1.0, 9.81), 0.0);
    }

    #[test]
    fn test_local_speed_uses_normal_velocity() {
        let mut face = FaceTwoSide::zeros((1, 1));
        for side in [&mut face.minus, &mut face.plus] {
            side.p[[0, 0, 0]] = 1.0;
            side.p[[1, 0, 0]] = 0.0;
            side.p[[2, 0, 0]] = 5.0;
        }
        let c = 10.0_f64.sqrt();
        local_speed(&mut face, GridAxis::X, 10.0, ExecutionBackend::Serial);
        assert_relative_eq!(face.plus.a[[0, 0]], c);
        assert_relative_eq!(face.minus.a[[0, 0]], -c);

        local_speed(&mut face, GridAxis::Y, 10.0, ExecutionBackend::Serial);
        assert_relative_eq!(face.plus.a[[0, 0]], 5.0 + c);
        assert_relative_eq!(face.minus.a[[0, 0]], 0.0);
    }
}
