//! Central-upwind numerical flux (Kurganov-Petrova).
//!
//! With one-sided speeds `a+ >= 0 >= a-`, physical fluxes `f±` and face
//! values `q±`:
//!
//! cf = (a+·f- - a-·f+ + a+·a-·(q+ - q-)) / (a+ - a-)
//!
//! Where `a+ == a-` (both zero, a dry face) the flux is zero.
//!
//! Reference: Kurganov & Petrova (2007), "A second-order well-balanced
//! positivity preserving central-upwind scheme for the Saint-Venant system"

use ndarray::{Array3, Axis, Zip};

use crate::backend::{ExecutionBackend, zip_for_each};
use crate::grid::GridAxis;
use crate::state::{FaceOneSide, FaceQuantities, FaceTwoSide, NFIELDS};

/// Physical flux normal to x from `(w, hu, hv)` and `(h, u, v)`.
#[inline]
pub fn discontinuous_flux_x(q: [f64; NFIELDS], p: [f64; NFIELDS], half_g: f64) -> [f64; NFIELDS] {
    let hu = q[1];
    [hu, hu * p[1] + half_g * p[0] * p[0], hu * p[2]]
}

/// Physical flux normal to y from `(w, hu, hv)` and `(h, u, v)`.
#[inline]
pub fn discontinuous_flux_y(q: [f64; NFIELDS], p: [f64; NFIELDS], half_g: f64) -> [f64; NFIELDS] {
    let hv = q[2];
    [hv, hv * p[1], hv * p[2] + half_g * p[0] * p[0]]
}

/// Central-upwind blend of one field on one face.
///
/// # Example
///
/// ```
/// use cu_swe::flux::central_upwind;
///
/// // equal states give back the physical flux
/// assert_eq!(central_upwind(-2.0, 2.0, 3.0, 3.0, 1.0, 1.0), 3.0);
/// // a dry face carries nothing
/// assert_eq!(central_upwind(0.0, 0.0, 3.0, 5.0, 1.0, 2.0), 0.0);
/// ```
#[inline]
pub fn central_upwind(a_minus: f64, a_plus: f64, fm: f64, fp: f64, qm: f64, qp: f64) -> f64 {
    let denom = a_plus - a_minus;
    if denom == 0.0 {
        return 0.0;
    }
    (a_plus * fm - a_minus * fp + a_plus * a_minus * (qp - qm)) / denom
}

fn side_flux(side: &mut FaceOneSide, axis: GridAxis, half_g: f64, backend: ExecutionBackend) {
    let flux = match axis {
        GridAxis::X => discontinuous_flux_x,
        GridAxis::Y => discontinuous_flux_y,
    };
    zip_for_each!(
        backend,
        Zip::from(side.f.lanes_mut(Axis(0)))
            .and(side.q.lanes(Axis(0)))
            .and(side.p.lanes(Axis(0))),
        |mut f, q, p| {
            let out = flux([q[0], q[1], q[2]], [p[0], p[1], p[2]], half_g);
            f[0] = out[0];
            f[1] = out[1];
            f[2] = out[2];
        }
    );
}

/// Physical fluxes on both sides of every face.
pub fn compute_discontinuous_fluxes(
    face: &mut FaceQuantities,
    gravity: f64,
    backend: ExecutionBackend,
) {
    let half_g = 0.5 * gravity;
    for (pair, axis) in [(&mut face.x, GridAxis::X), (&mut face.y, GridAxis::Y)] {
        side_flux(&mut pair.minus, axis, half_g, backend);
        side_flux(&mut pair.plus, axis, half_g, backend);
    }
}

fn common_flux(face: &mut FaceTwoSide, backend: ExecutionBackend) {
    let FaceTwoSide { minus, plus, cf } = face;
    let (fm, fp) = (minus.f.view(), plus.f.view());
    let (qm, qp) = (minus.q.view(), plus.q.view());
    zip_for_each!(
        backend,
        Zip::indexed(&minus.a)
            .and(&plus.a)
            .and(cf.lanes_mut(Axis(0))),
        |(j, i), &am, &ap, mut cf| {
            for k in 0..NFIELDS {
                cf[k] = central_upwind(
                    am,
                    ap,
                    fm[[k, j, i]],
                    fp[[k, j, i]],
                    qm[[k, j, i]],
                    qp[[k, j, i]],
                );
            }
        }
    );
}

/// Common fluxes `x.cf` and `y.cf` from the one-sided speeds, fluxes and
/// face values.
pub fn compute_central_fluxes(face: &mut FaceQuantities, backend: ExecutionBackend) {
    common_flux(&mut face.x, backend);
    common_flux(&mut face.y, backend);
}

/// Total common flux through a family of faces, field by field.
///
/// Handy for conservation checks: on a closed domain the net x and y
/// boundary flux of `w` should balance the volume change.
pub fn boundary_flux_sum(cf: &Array3<f64>, axis: GridAxis) -> [f64; NFIELDS] {
    let ax = match axis {
        GridAxis::X => Axis(2),
        GridAxis::Y => Axis(1),
    };
    let last = cf.len_of(ax) - 1;
    let mut out = [0.0; NFIELDS];
    for (k, o) in out.iter_mut().enumerate() {
        let field = cf.index_axis(Axis(0), k);
        let fld_ax = Axis(ax.index() - 1);
        *o = field.index_axis(fld_ax, last).sum() - field.index_axis(fld_ax, 0).sum();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_physical_fluxes() {
        let q = [3.0, 2.0, 1.0];
        let p = [2.0, 1.0, 0.5];
        assert_eq!(discontinuous_flux_x(q, p, 5.0), [2.0, 22.0, 1.0]);
        assert_eq!(discontinuous_flux_y(q, p, 5.0), [1.0, 1.0, 20.5]);
    }

    #[test]
    fn test_central_upwind_is_upwind_for_one_sided_speeds() {
        // a- = 0: the minus-side flux is taken
        assert_relative_eq!(central_upwind(0.0, 4.0, 1.0, 7.0, 0.0, 9.0), 1.0);
        // a+ = 0: the plus-side flux is taken
        assert_relative_eq!(central_upwind(-4.0, 0.0, 1.0, 7.0, 0.0, 9.0), 7.0);
    }

    #[test]
    fn test_common_flux_masks_dry_faces() {
        let mut face = FaceTwoSide::zeros((1, 2));
        face.minus.f.fill(1.0);
        face.plus.f.fill(1.0);
        face.minus.a[[0, 0]] = -1.0;
        face.plus.a[[0, 0]] = 1.0;
        common_flux(&mut face, ExecutionBackend::Serial);
        assert_eq!(face.cf[[0, 0, 0]], 1.0);
        assert_eq!(face.cf[[2, 0, 0]], 1.0);
        assert_eq!(face.cf[[0, 0, 1]], 0.0);
        assert!(face.cf.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_boundary_flux_sum() {
        let cf = Array3::from_shape_fn((3, 2, 3), |(k, _, i)| (k + i) as f64);
        let net = boundary_flux_sum(&cf, GridAxis::X);
        assert_eq!(net, [4.0, 4.0, 4.0]);
        let net = boundary_flux_sum(&cf, GridAxis::Y);
        assert_eq!(net, [0.0, 0.0, 0.0]);
    }
}
