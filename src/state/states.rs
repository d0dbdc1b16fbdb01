//! Per-domain solution and working arrays.

use log::{debug, warn};
use ndarray::{Array, Array3, ArrayView3, ArrayViewMut3, Dimension, IntoDimension, s};

use crate::error::StateError;
use crate::grid::Domain;

use super::faces::{FaceQuantities, NFIELDS};

/// Every array the flux computation reads or writes for one domain.
///
/// Allocated once and overwritten in place on every call. Cell arrays are
/// laid out `[field, row(y), col(x)]` and include the two-cell halo.
///
/// # Example
///
/// ```
/// use cu_swe::grid::Domain;
/// use cu_swe::state::States;
/// use cu_swe::types::Extent2D;
///
/// let domain = Domain::new(4, 5, Extent2D::new(0.0, 4.0, 0.0, 5.0)).unwrap();
/// let mut states = States::new(domain);
/// states.fill_interior([1.0, 0.0, 0.0]);
/// assert_eq!(states.q.shape(), &[3, 9, 8]);
/// assert_eq!(states.slpx.shape(), &[3, 5, 6]);
/// assert!(states.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct States {
    /// Grid the arrays are laid out on.
    pub domain: Domain,
    /// Conservative quantities `(w, hu, hv)`, shape `(3, ny + 4, nx + 4)`.
    pub q: Array3<f64>,
    /// Primitive quantities `(h, u, v)`, same shape as `q`.
    pub p: Array3<f64>,
    /// Limited slopes along x, shape `(3, ny, nx + 2)`.
    pub slpx: Array3<f64>,
    /// Limited slopes along y, shape `(3, ny + 2, nx)`.
    pub slpy: Array3<f64>,
    /// Face quantities for both axes.
    pub face: FaceQuantities,
}

impl States {
    /// Allocate zeroed arrays for `domain`.
    pub fn new(domain: Domain) -> Self {
        let (ny, nx) = domain.shape();
        let (nyp, nxp) = domain.padded_shape();
        debug!("allocating states for {}x{} cells ({}x{} padded)", nx, ny, nxp, nyp);
        Self {
            q: Array3::zeros((NFIELDS, nyp, nxp)),
            p: Array3::zeros((NFIELDS, nyp, nxp)),
            slpx: Array3::zeros((NFIELDS, ny, nx + 2)),
            slpy: Array3::zeros((NFIELDS, ny + 2, nx)),
            face: FaceQuantities::zeros(nx, ny),
            domain,
        }
    }

    /// Check every array shape against the domain and the face grids
    /// against each other.
    pub fn validate(&self) -> Result<(), StateError> {
        let (ny, nx) = self.domain.shape();
        let (nyp, nxp) = self.domain.padded_shape();
        let cells = [NFIELDS, nyp, nxp];
        for (name, actual) in [("q", self.q.shape()), ("p", self.p.shape())] {
            if actual != &cells[..] {
                return Err(StateError::shape_mismatch(name, &cells, actual));
            }
        }
        let slpx = [NFIELDS, ny, nx + 2];
        if self.slpx.shape() != &slpx[..] {
            return Err(StateError::shape_mismatch("slpx", &slpx, self.slpx.shape()));
        }
        let slpy = [NFIELDS, ny + 2, nx];
        if self.slpy.shape() != &slpy[..] {
            return Err(StateError::shape_mismatch("slpy", &slpy, self.slpy.shape()));
        }
        self.face.check_consistency()?;
        self.face.x.validate(self.domain.x_face_shape(), 'x')?;
        self.face.y.validate(self.domain.y_face_shape(), 'y')?;
        Ok(())
    }

    /// Scan every published array for NaN or Inf.
    ///
    /// Reports the first offending entry of the first offending array.
    pub fn check_finite(&self) -> Result<(), StateError> {
        check_array("q", &self.q)?;
        check_array("p", &self.p)?;
        for (axis, face) in [("x", &self.face.x), ("y", &self.face.y)] {
            let names = if axis == "x" {
                ["x.cf", "x.minus.a", "x.plus.a"]
            } else {
                ["y.cf", "y.minus.a", "y.plus.a"]
            };
            check_array(names[0], &face.cf)?;
            check_array(names[1], &face.minus.a)?;
            check_array(names[2], &face.plus.a)?;
        }
        Ok(())
    }

    /// Set the interior of `q` to the constant `(w, hu, hv)`.
    pub fn fill_interior(&mut self, values: [f64; NFIELDS]) {
        let mut interior = self.q_interior_mut();
        for (k, value) in values.into_iter().enumerate() {
            interior.index_axis_mut(ndarray::Axis(0), k).fill(value);
        }
    }

    /// Interior cells of `q`.
    pub fn q_interior(&self) -> ArrayView3<'_, f64> {
        let (rows, cols) = (self.domain.rows(), self.domain.cols());
        self.q.slice(s![.., rows, cols])
    }

    /// Mutable interior cells of `q`.
    pub fn q_interior_mut(&mut self) -> ArrayViewMut3<'_, f64> {
        let (rows, cols) = (self.domain.rows(), self.domain.cols());
        self.q.slice_mut(s![.., rows, cols])
    }

    /// Interior cells of `p`.
    pub fn p_interior(&self) -> ArrayView3<'_, f64> {
        let (rows, cols) = (self.domain.rows(), self.domain.cols());
        self.p.slice(s![.., rows, cols])
    }
}

fn check_array<D: Dimension>(name: &'static str, a: &Array<f64, D>) -> Result<(), StateError> {
    if a.iter().all(|v| v.is_finite()) {
        return Ok(());
    }
    match a.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some((index, &value)) => {
            let index = index.into_dimension().slice().to_vec();
            warn!("non-finite value {} in {} at {:?}", value, name, index);
            Err(StateError::NonFinite { array: name, index, value })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Extent2D;

    fn states() -> States {
        let domain = Domain::new(4, 5, Extent2D::new(0.0, 4.0, 0.0, 5.0)).unwrap();
        States::new(domain)
    }

    #[test]
    fn test_shapes() {
        let s = states();
        assert_eq!(s.q.shape(), &[3, 9, 8]);
        assert_eq!(s.p.shape(), &[3, 9, 8]);
        assert_eq!(s.slpx.shape(), &[3, 5, 6]);
        assert_eq!(s.slpy.shape(), &[3, 7, 4]);
        assert_eq!(s.face.x.cf.shape(), &[3, 5, 5]);
        assert_eq!(s.face.y.cf.shape(), &[3, 6, 4]);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_shape() {
        let mut s = states();
        s.slpy = Array3::zeros((3, 6, 4));
        assert_eq!(
            s.validate(),
            Err(StateError::shape_mismatch("slpy", &[3, 7, 4], &[3, 6, 4]))
        );
    }

    #[test]
    fn test_fill_interior_leaves_halo() {
        let mut s = states();
        s.fill_interior([2.0, 0.5, -0.5]);
        assert_eq!(s.q[[0, 2, 2]], 2.0);
        assert_eq!(s.q[[1, 6, 5]], 0.5);
        assert_eq!(s.q[[2, 4, 3]], -0.5);
        assert_eq!(s.q[[0, 1, 2]], 0.0);
        assert_eq!(s.q[[0, 2, 6]], 0.0);
        assert!(s.q_interior().iter().all(|&v| v != 0.0));
    }

    #[test]
    fn test_check_finite() {
        let mut s = states();
        assert!(s.check_finite().is_ok());
        s.face.y.cf[[1, 2, 3]] = f64::NAN;
        match s.check_finite() {
            Err(StateError::NonFinite { array, index, value }) => {
                assert_eq!(array, "y.cf");
                assert_eq!(index, vec![1, 2, 3]);
                assert!(value.is_nan());
            }
            other => panic!("expected NonFinite, got {:?}", other),
        }
    }
}
