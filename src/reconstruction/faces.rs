//! Face values from limited linear reconstruction.
//!
//! Each face gets two values: the minus side extrapolated from the cell
//! below it and the plus side extrapolated from the cell above it. After
//! extrapolation the depth is recovered, optionally corrected so it stays
//! non-negative, and velocities and conservative values are rebuilt from
//! the corrected depth.

use log::debug;
use ndarray::{Array2, Array3, ArrayView1, ArrayViewMut1, Axis, Zip, s};

use crate::backend::{ExecutionBackend, zip_for_each};
use crate::config::KernelConfig;
use crate::grid::{Domain, Topography};
use crate::state::{FaceOneSide, FaceQuantities, FaceTwoSide};

/// Corrected `(hl, hr)` on the two faces of an interior cell.
///
/// `hl` is the depth extrapolated to the lower face, `hr` the one
/// extrapolated to the upper face and `hc` the cell depth. When one face
/// would be dry the whole cell volume is moved to the other face.
#[inline]
pub fn fix_face_depth_internal(hl: f64, hc: f64, hr: f64, tol: f64) -> (f64, f64) {
    if hc < tol {
        (0.0, 0.0)
    } else if hl < tol {
        (0.0, 2.0 * hc)
    } else if hr < tol {
        (2.0 * hc, 0.0)
    } else {
        (hl, hr)
    }
}

/// Corrected depth on a boundary face extrapolated from a ghost cell of
/// depth `hc`.
#[inline]
pub fn fix_face_depth_edge(h: f64, hc: f64, tol: f64) -> f64 {
    if hc < tol || h < tol {
        0.0
    } else {
        h.min(2.0 * hc)
    }
}

/// Extrapolate cell values to both sides of every face.
///
/// ```text
/// x.minus.q[.., j, i] = Q[cell i - 1] + slpx[cell i - 1]
/// x.plus.q[.., j, i]  = Q[cell i]     - slpx[cell i]
/// ```
///
/// and the same along y.
pub fn extrapolate_to_faces(
    q: &Array3<f64>,
    slpx: &Array3<f64>,
    slpy: &Array3<f64>,
    face: &mut FaceQuantities,
    domain: &Domain,
    backend: ExecutionBackend,
) {
    let (rows, cols) = (domain.rows(), domain.cols());
    let (nx, ny) = (domain.nx(), domain.ny());
    let (xbg, xed) = (cols.start, cols.end);
    let (ybg, yed) = (rows.start, rows.end);

    zip_for_each!(
        backend,
        Zip::from(&mut face.x.minus.q)
            .and(q.slice(s![.., rows.clone(), xbg - 1..xed]))
            .and(slpx.slice(s![.., .., ..nx + 1])),
        |f, &q, &slp| *f = q + slp
    );
    zip_for_each!(
        backend,
        Zip::from(&mut face.x.plus.q)
            .and(q.slice(s![.., rows, xbg..xed + 1]))
            .and(slpx.slice(s![.., .., 1..])),
        |f, &q, &slp| *f = q - slp
    );
    zip_for_each!(
        backend,
        Zip::from(&mut face.y.minus.q)
            .and(q.slice(s![.., ybg - 1..yed, cols.clone()]))
            .and(slpy.slice(s![.., ..ny + 1, ..])),
        |f, &q, &slp| *f = q + slp
    );
    zip_for_each!(
        backend,
        Zip::from(&mut face.y.plus.q)
            .and(q.slice(s![.., ybg..yed + 1, cols]))
            .and(slpy.slice(s![.., 1.., ..])),
        |f, &q, &slp| *f = q - slp
    );
}

/// `p[0] = q[0] - b` on one side of a family of faces.
pub fn face_depth(side: &mut FaceOneSide, b: &Array2<f64>, backend: ExecutionBackend) {
    zip_for_each!(
        backend,
        Zip::from(side.p.index_axis_mut(Axis(0), 0))
            .and(side.q.index_axis(Axis(0), 0))
            .and(b),
        |h, &w, &b| *h = w - b
    );
}

/// Positivity fix of the face depths of both axes.
///
/// `p` is the cell-centered primitive array; ghost depths are needed for
/// the faces on the domain boundary.
pub fn apply_dry_correction(
    face: &mut FaceQuantities,
    p: &Array3<f64>,
    domain: &Domain,
    config: &KernelConfig,
) {
    let (rows, cols) = (domain.rows(), domain.cols());
    let (nx, ny) = (domain.nx(), domain.ny());
    let (xbg, xed) = (cols.start, cols.end);
    let (ybg, yed) = (rows.start, rows.end);
    let tol = config.tol;
    let h = p.index_axis(Axis(0), 0);

    let FaceTwoSide { minus, plus, .. } = &mut face.x;
    {
        let mut hm = minus.p.index_axis_mut(Axis(0), 0);
        let mut hp = plus.p.index_axis_mut(Axis(0), 0);
        zip_for_each!(
            config.backend,
            Zip::from(hp.slice_mut(s![.., ..nx]))
                .and(hm.slice_mut(s![.., 1..]))
                .and(h.slice(s![rows.clone(), cols.clone()])),
            |hl, hr, &hc| (*hl, *hr) = fix_face_depth_internal(*hl, hc, *hr, tol)
        );
        fix_edge(hm.index_axis_mut(Axis(1), 0), h.slice(s![rows.clone(), xbg - 1]), tol);
        fix_edge(hp.index_axis_mut(Axis(1), nx), h.slice(s![rows.clone(), xed]), tol);
    }

    let FaceTwoSide { minus, plus, .. } = &mut face.y;
    {
        let mut hm = minus.p.index_axis_mut(Axis(0), 0);
        let mut hp = plus.p.index_axis_mut(Axis(0), 0);
        zip_for_each!(
            config.backend,
            Zip::from(hp.slice_mut(s![..ny, ..]))
                .and(hm.slice_mut(s![1.., ..]))
                .and(h.slice(s![rows, cols.clone()])),
            |hl, hr, &hc| (*hl, *hr) = fix_face_depth_internal(*hl, hc, *hr, tol)
        );
        fix_edge(hm.index_axis_mut(Axis(0), 0), h.slice(s![ybg - 1, cols.clone()]), tol);
        fix_edge(hp.index_axis_mut(Axis(0), ny), h.slice(s![yed, cols]), tol);
    }
}

fn fix_edge(faces: ArrayViewMut1<f64>, ghost: ArrayView1<f64>, tol: f64) {
    Zip::from(faces)
        .and(ghost)
        .for_each(|h, &hc| *h = fix_face_depth_edge(*h, hc, tol));
}

/// `u = hu / h`, `v = hv / h` on faces deeper than `drytol`, zero elsewhere.
pub fn face_velocity(side: &mut FaceOneSide, drytol: f64, backend: ExecutionBackend) {
    zip_for_each!(
        backend,
        Zip::from(side.p.lanes_mut(Axis(0))).and(side.q.lanes(Axis(0))),
        |mut p, q| {
            let h = p[0];
            if h > drytol {
                p[1] = q[1] / h;
                p[2] = q[2] / h;
            } else {
                p[1] = 0.0;
                p[2] = 0.0;
            }
        }
    );
}

/// Rebuild `(w, hu, hv)` from the corrected `(h, u, v)`.
pub fn face_conservatives(side: &mut FaceOneSide, b: &Array2<f64>, backend: ExecutionBackend) {
    zip_for_each!(
        backend,
        Zip::from(side.q.lanes_mut(Axis(0)))
            .and(side.p.lanes(Axis(0)))
            .and(b),
        |mut q, p, &b| {
            q[0] = p[0] + b;
            q[1] = p[0] * p[1];
            q[2] = p[0] * p[2];
        }
    );
}

/// Full face reconstruction: extrapolation, depth, optional dry
/// correction, velocities and conservative reassembly.
#[allow(clippy::too_many_arguments)]
pub fn reconstruct_faces(
    q: &Array3<f64>,
    p: &Array3<f64>,
    slpx: &Array3<f64>,
    slpy: &Array3<f64>,
    face: &mut FaceQuantities,
    topo: &Topography,
    domain: &Domain,
    config: &KernelConfig,
) {
    let backend = config.backend;
    extrapolate_to_faces(q, slpx, slpy, face, domain, backend);

    for (pair, b) in [(&mut face.x, &topo.xf), (&mut face.y, &topo.yf)] {
        face_depth(&mut pair.minus, b, backend);
        face_depth(&mut pair.plus, b, backend);
    }

    if config.dry_correction {
        apply_dry_correction(face, p, domain, config);
    } else {
        debug!("face depth correction disabled");
    }

    for (pair, b) in [(&mut face.x, &topo.xf), (&mut face.y, &topo.yf)] {
        for side in [&mut pair.minus, &mut pair.plus] {
            face_velocity(side, config.drytol, backend);
            face_conservatives(side, b, backend);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_fix_keeps_volume() {
        assert_eq!(fix_face_depth_internal(0.4, 0.5, 0.6, 1e-8), (0.4, 0.6));
        assert_eq!(fix_face_depth_internal(-0.1, 0.5, 1.1, 1e-8), (0.0, 1.0));
        assert_eq!(fix_face_depth_internal(1.2, 0.5, -0.2, 1e-8), (1.0, 0.0));
        assert_eq!(fix_face_depth_internal(0.1, 0.0, 0.1, 1e-8), (0.0, 0.0));
    }

    #[test]
    fn test_internal_fix_order() {
        // the lower face is checked first
        assert_eq!(fix_face_depth_internal(-1.0, 0.5, -1.0, 1e-8), (0.0, 1.0));
    }

    #[test]
    fn test_edge_fix() {
        assert_eq!(fix_face_depth_edge(0.3, 0.2, 1e-8), 0.3);
        assert_eq!(fix_face_depth_edge(0.5, 0.2, 1e-8), 0.4);
        assert_eq!(fix_face_depth_edge(-0.1, 0.2, 1e-8), 0.0);
        assert_eq!(fix_face_depth_edge(0.1, 0.0, 1e-8), 0.0);
    }

    #[test]
    fn test_face_velocity_masks_dry() {
        let mut side = FaceOneSide::zeros((1, 2));
        side.q[[1, 0, 0]] = 2.0;
        side.q[[2, 0, 0]] = -1.0;
        side.p[[0, 0, 0]] = 0.5;
        side.q[[1, 0, 1]] = 2.0;
        side.p[[0, 0, 1]] = 1e-5;
        face_velocity(&mut side, 1e-4, ExecutionBackend::Serial);
        assert_eq!(side.p[[1, 0, 0]], 4.0);
        assert_eq!(side.p[[2, 0, 0]], -2.0);
        assert_eq!(side.p[[1, 0, 1]], 0.0);
    }

    #[test]
    fn test_face_conservatives() {
        let mut side = FaceOneSide::zeros((1, 1));
        side.p[[0, 0, 0]] = 2.0;
        side.p[[1, 0, 0]] = 0.5;
        side.p[[2, 0, 0]] = -1.0;
        let b = Array2::from_elem((1, 1), 3.0);
        face_conservatives(&mut side, &b, ExecutionBackend::Serial);
        assert_eq!(side.q[[0, 0, 0]], 5.0);
        assert_eq!(side.q[[1, 0, 0]], 1.0);
        assert_eq!(side.q[[2, 0, 0]], -2.0);
    }
}
