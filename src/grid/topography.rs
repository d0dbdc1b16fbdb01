//! Static bottom elevation.
//!
//! Elevation is stored three times: at cell centers (halo-padded), at the
//! centers of faces normal to x, and at the centers of faces normal to y.
//! The face values are the ones the reconstruction subtracts from the
//! extrapolated water level; the center values define the cell depth.

use ndarray::{Array1, Array2, ArrayView2, ArrayViewMut1, Axis, Zip, s};

use crate::error::StateError;
use crate::types::Side;

use super::domain::Domain;

/// Bottom elevation on cell centers and faces.
///
/// # Example
///
/// ```
/// use cu_swe::grid::{Domain, Topography};
/// use cu_swe::types::Extent2D;
///
/// let domain = Domain::new(4, 3, Extent2D::new(0.0, 4.0, 0.0, 3.0)).unwrap();
/// let topo = Topography::from_fn(&domain, |x, _y| 0.1 * x);
/// assert!((topo.c[[2, 2]] - 0.05).abs() < 1e-12);
/// assert!((topo.xf[[0, 4]] - 0.4).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Topography {
    /// Cell-center elevation, shape `(ny + 4, nx + 4)`.
    pub c: Array2<f64>,
    /// Elevation on faces normal to x, shape `(ny, nx + 1)`.
    pub xf: Array2<f64>,
    /// Elevation on faces normal to y, shape `(ny + 1, nx)`.
    pub yf: Array2<f64>,
}

impl Topography {
    /// Constant elevation everywhere, halo included.
    pub fn flat(domain: &Domain, elevation: f64) -> Self {
        Self {
            c: Array2::from_elem(domain.padded_shape(), elevation),
            xf: Array2::from_elem(domain.x_face_shape(), elevation),
            yf: Array2::from_elem(domain.y_face_shape(), elevation),
        }
    }

    /// Build from elevations on the `(ny + 1, nx + 1)` cell vertices.
    ///
    /// Face values are two-vertex means, interior centers four-vertex means.
    /// Ghost centers are extrapolated linearly through the boundary faces.
    pub fn from_vertices(domain: &Domain, vertices: ArrayView2<f64>) -> Result<Self, StateError> {
        let (ny, nx) = domain.shape();
        if vertices.dim() != (ny + 1, nx + 1) {
            return Err(StateError::shape_mismatch(
                "topography vertices",
                &[ny + 1, nx + 1],
                vertices.shape(),
            ));
        }
        Ok(Self::build(domain, vertices))
    }

    /// Build by sampling `f(x, y)` on the cell vertices.
    pub fn from_fn<F>(domain: &Domain, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let vertices = Array2::from_shape_fn((domain.ny() + 1, domain.nx() + 1), |(j, i)| {
            f(domain.x.v[i], domain.y.v[j])
        });
        Self::build(domain, vertices.view())
    }

    fn build(domain: &Domain, vertices: ArrayView2<f64>) -> Self {
        let (ny, nx) = domain.shape();
        let xf = (&vertices.slice(s![..ny, ..]) + &vertices.slice(s![1.., ..])) / 2.0;
        let yf = (&vertices.slice(s![.., ..nx]) + &vertices.slice(s![.., 1..])) / 2.0;

        let mut c = Array2::zeros(domain.padded_shape());
        Zip::from(c.slice_mut(s![domain.rows(), domain.cols()]))
            .and(vertices.slice(s![..ny, ..nx]))
            .and(vertices.slice(s![..ny, 1..]))
            .and(vertices.slice(s![1.., ..nx]))
            .and(vertices.slice(s![1.., 1..]))
            .for_each(|c, &sw, &se, &nw, &ne| *c = (sw + se + nw + ne) / 4.0);

        let mut topo = Self { c, xf, yf };
        for side in Side::ALL {
            topo.extrapolate_ghosts(domain, side);
        }
        topo.fill_corners(domain);
        topo
    }

    /// Assemble from precomputed arrays, checking their shapes.
    pub fn from_parts(
        domain: &Domain,
        c: Array2<f64>,
        xf: Array2<f64>,
        yf: Array2<f64>,
    ) -> Result<Self, StateError> {
        let topo = Self { c, xf, yf };
        topo.validate(domain)?;
        Ok(topo)
    }

    /// Check array shapes against `domain`.
    pub fn validate(&self, domain: &Domain) -> Result<(), StateError> {
        let (ny, nx) = domain.padded_shape();
        if self.c.dim() != (ny, nx) {
            return Err(StateError::shape_mismatch("topography c", &[ny, nx], self.c.shape()));
        }
        let (ny, nx) = domain.x_face_shape();
        if self.xf.dim() != (ny, nx) {
            return Err(StateError::shape_mismatch("topography xf", &[ny, nx], self.xf.shape()));
        }
        let (ny, nx) = domain.y_face_shape();
        if self.yf.dim() != (ny, nx) {
            return Err(StateError::shape_mismatch("topography yf", &[ny, nx], self.yf.shape()));
        }
        Ok(())
    }

    /// Ghost centers of `side` extrapolated linearly through the boundary
    /// face: `g1 = 2·b_face − b0`, `g2 = 4·b_face − 3·b0`.
    pub fn extrapolate_ghosts(&mut self, domain: &Domain, side: Side) {
        let layers = domain.ghost_layers(side);
        let face = self.boundary_faces(domain, side);
        let first = layer(&mut self.c, domain, side, layers.first).to_owned();

        Zip::from(layer(&mut self.c, domain, side, layers.inner))
            .and(&face)
            .and(&first)
            .for_each(|g, &f, &b0| *g = 2.0 * f - b0);
        Zip::from(layer(&mut self.c, domain, side, layers.outer))
            .and(&face)
            .and(&first)
            .for_each(|g, &f, &b0| *g = 4.0 * f - 3.0 * b0);
    }

    /// Ghost centers of `side` set to the boundary face elevation.
    pub fn hold_ghosts(&mut self, domain: &Domain, side: Side) {
        let layers = domain.ghost_layers(side);
        let face = self.boundary_faces(domain, side);
        layer(&mut self.c, domain, side, layers.inner).assign(&face);
        layer(&mut self.c, domain, side, layers.outer).assign(&face);
    }

    /// Ghost centers of `side` mirrored across the boundary face.
    pub fn mirror_ghosts(&mut self, domain: &Domain, side: Side) {
        let layers = domain.ghost_layers(side);
        let first = layer(&mut self.c, domain, side, layers.first).to_owned();
        let second = layer(&mut self.c, domain, side, layers.second).to_owned();
        layer(&mut self.c, domain, side, layers.inner).assign(&first);
        layer(&mut self.c, domain, side, layers.outer).assign(&second);
    }

    /// Halo corners copied from the x-direction ghosts of the nearest interior row.
    ///
    /// No stencil reads the corners; they are filled so that every center
    /// depth is finite.
    pub fn fill_corners(&mut self, domain: &Domain) {
        let h = domain.nhalo();
        let (nyp, _) = domain.padded_shape();
        let (south, north) = (h, nyp - h - 1);
        for row in 0..h {
            let src = self.c.row(south).to_owned();
            copy_halo_columns(self.c.row_mut(row), &src, h);
            let src = self.c.row(north).to_owned();
            copy_halo_columns(self.c.row_mut(nyp - 1 - row), &src, h);
        }
    }

    /// Elevation on the boundary faces of `side`.
    fn boundary_faces(&self, domain: &Domain, side: Side) -> Array1<f64> {
        let idx = domain.boundary_face(side);
        if side.is_x_normal() {
            self.xf.index_axis(Axis(1), idx).to_owned()
        } else {
            self.yf.index_axis(Axis(0), idx).to_owned()
        }
    }
}

/// Interior stretch of one padded layer normal to `side`.
fn layer<'a>(
    a: &'a mut Array2<f64>,
    domain: &Domain,
    side: Side,
    index: usize,
) -> ArrayViewMut1<'a, f64> {
    let along = domain.tangential(side);
    if side.is_x_normal() {
        a.slice_mut(s![along, index])
    } else {
        a.slice_mut(s![index, along])
    }
}

fn copy_halo_columns(mut dst: ArrayViewMut1<f64>, src: &Array1<f64>, h: usize) {
    let n = dst.len();
    for i in (0..h).chain(n - h..n) {
        dst[i] = src[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Extent2D;
    use approx::assert_relative_eq;

    fn domain() -> Domain {
        Domain::new(4, 3, Extent2D::new(0.0, 4.0, 0.0, 3.0)).unwrap()
    }

    #[test]
    fn test_flat() {
        let d = domain();
        let topo = Topography::flat(&d, -2.0);
        assert_eq!(topo.c.dim(), (7, 8));
        assert_eq!(topo.xf.dim(), (3, 5));
        assert_eq!(topo.yf.dim(), (4, 4));
        assert!(topo.c.iter().all(|&b| b == -2.0));
        assert!(topo.validate(&d).is_ok());
    }

    #[test]
    fn test_plane_is_reproduced_in_halo() {
        let d = domain();
        let plane = |x: f64, y: f64| 1.0 + 0.5 * x - 0.25 * y;
        let topo = Topography::from_fn(&d, plane);
        // padded cell (j, i) is centered at (i - 1.5, j - 1.5)
        let center = |j: usize, i: usize| plane(i as f64 - 1.5, j as f64 - 1.5);
        for j in 0..7 {
            for i in 2..6 {
                assert_relative_eq!(topo.c[[j, i]], center(j, i), epsilon = 1e-12);
            }
        }
        for j in 2..5 {
            for i in [0, 1, 6, 7] {
                assert_relative_eq!(topo.c[[j, i]], center(j, i), epsilon = 1e-12);
            }
        }
        assert_relative_eq!(topo.xf[[0, 0]], 1.0 - 0.125, epsilon = 1e-12);
        assert_relative_eq!(topo.yf[[0, 0]], 1.25, epsilon = 1e-12);
    }

    #[test]
    fn test_hold_ghosts() {
        let d = domain();
        let mut topo = Topography::from_fn(&d, |x, _| x);
        topo.hold_ghosts(&d, Side::East);
        assert_relative_eq!(topo.c[[3, 6]], 4.0);
        assert_relative_eq!(topo.c[[3, 7]], 4.0);
        assert_relative_eq!(topo.c[[3, 1]], -0.5);
    }

    #[test]
    fn test_mirror_ghosts() {
        let d = domain();
        let mut topo = Topography::from_fn(&d, |_, y| y);
        topo.mirror_ghosts(&d, Side::South);
        assert_relative_eq!(topo.c[[1, 3]], topo.c[[2, 3]]);
        assert_relative_eq!(topo.c[[0, 3]], topo.c[[3, 3]]);
        assert_relative_eq!(topo.c[[1, 3]], 0.5);
    }

    #[test]
    fn test_corners_are_filled() {
        let d = domain();
        let topo = Topography::from_fn(&d, |x, _| x);
        assert_relative_eq!(topo.c[[0, 0]], topo.c[[2, 0]]);
        assert_relative_eq!(topo.c[[6, 7]], topo.c[[4, 7]]);
    }

    #[test]
    fn test_shape_errors() {
        let d = domain();
        let bad = Array2::zeros((3, 3));
        assert!(matches!(
            Topography::from_vertices(&d, bad.view()),
            Err(StateError::ShapeMismatch { .. })
        ));
        let flat = Topography::flat(&d, 0.0);
        assert!(
            Topography::from_parts(&d, flat.c.clone(), flat.yf.clone(), flat.xf.clone()).is_err()
        );
    }
}
