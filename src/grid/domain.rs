//! Halo-padded 2D domain.

use std::ops::Range;

use log::debug;

use crate::error::GridError;
use crate::types::{Extent2D, Side};

use super::gridline::{GridAxis, Gridline};

/// Number of ghost layers on every side; the stencils need exactly two.
pub const NHALO: usize = 2;

/// Padded indices, along the side normal, of the halo and boundary cells
/// of one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GhostLayers {
    /// Outermost ghost layer.
    pub outer: usize,
    /// Ghost layer touching the interior.
    pub inner: usize,
    /// Interior cell on the boundary.
    pub first: usize,
    /// Interior cell next to `first`.
    pub second: usize,
}

/// A local structured grid patch with a two-cell halo.
///
/// Cell-centered arrays are laid out `[row(y), col(x)]` with shape
/// [`padded_shape`](Domain::padded_shape); interior cells occupy
/// `rows() × cols()`.
///
/// # Example
///
/// ```
/// use cu_swe::grid::Domain;
/// use cu_swe::types::Extent2D;
///
/// let domain = Domain::new(4, 5, Extent2D::new(0.0, 4.0, 0.0, 5.0)).unwrap();
/// assert_eq!(domain.shape(), (5, 4));
/// assert_eq!(domain.padded_shape(), (9, 8));
/// assert_eq!(domain.cols(), 2..6);
/// assert_eq!(domain.delta(), (1.0, 1.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Domain {
    /// Gridline along x.
    pub x: Gridline,
    /// Gridline along y.
    pub y: Gridline,
    nhalo: usize,
}

impl Domain {
    /// Single-patch domain with `nx × ny` cells covering `extent`.
    pub fn new(nx: usize, ny: usize, extent: Extent2D) -> Result<Self, GridError> {
        let x = Gridline::new(GridAxis::X, nx, extent.west, extent.east)?;
        let y = Gridline::new(GridAxis::Y, ny, extent.south, extent.north)?;
        Self::from_gridlines(x, y)
    }

    /// Domain from two validated gridlines.
    pub fn from_gridlines(x: Gridline, y: Gridline) -> Result<Self, GridError> {
        Self::with_halo(x, y, NHALO)
    }

    /// Domain with an explicit halo width; anything but [`NHALO`] is rejected.
    pub fn with_halo(x: Gridline, y: Gridline, nhalo: usize) -> Result<Self, GridError> {
        if nhalo != NHALO {
            return Err(GridError::UnsupportedHalo(nhalo));
        }
        if x.axis != GridAxis::X {
            return Err(GridError::WrongAxis {
                expected: 'x',
                actual: x.axis.letter(),
            });
        }
        if y.axis != GridAxis::Y {
            return Err(GridError::WrongAxis {
                expected: 'y',
                actual: y.axis.letter(),
            });
        }
        x.validate()?;
        y.validate()?;

        debug!(
            "domain {}x{} cells, dx = {}, dy = {}, extent {}",
            x.n,
            y.n,
            x.delta,
            y.delta,
            Extent2D::new(x.lower, x.upper, y.lower, y.upper)
        );
        Ok(Self { x, y, nhalo })
    }

    /// Halo width.
    #[inline]
    pub fn nhalo(&self) -> usize {
        self.nhalo
    }

    /// Interior cells along x.
    #[inline]
    pub fn nx(&self) -> usize {
        self.x.n
    }

    /// Interior cells along y.
    #[inline]
    pub fn ny(&self) -> usize {
        self.y.n
    }

    /// Interior shape `(ny, nx)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.y.n, self.x.n)
    }

    /// Shape including the halo, `(ny + 2·nhalo, nx + 2·nhalo)`.
    #[inline]
    pub fn padded_shape(&self) -> (usize, usize) {
        (self.y.n + 2 * self.nhalo, self.x.n + 2 * self.nhalo)
    }

    /// Shape of arrays on faces normal to x, `(ny, nx + 1)`.
    #[inline]
    pub fn x_face_shape(&self) -> (usize, usize) {
        (self.y.n, self.x.n + 1)
    }

    /// Shape of arrays on faces normal to y, `(ny + 1, nx)`.
    #[inline]
    pub fn y_face_shape(&self) -> (usize, usize) {
        (self.y.n + 1, self.x.n)
    }

    /// Cell sizes `(dy, dx)`.
    #[inline]
    pub fn delta(&self) -> (f64, f64) {
        (self.y.delta, self.x.delta)
    }

    /// Cell size along x.
    #[inline]
    pub fn dx(&self) -> f64 {
        self.x.delta
    }

    /// Cell size along y.
    #[inline]
    pub fn dy(&self) -> f64 {
        self.y.delta
    }

    /// Area of one cell.
    #[inline]
    pub fn cell_area(&self) -> f64 {
        self.x.delta * self.y.delta
    }

    /// Interior row range in padded index space.
    #[inline]
    pub fn rows(&self) -> Range<usize> {
        self.nhalo..self.nhalo + self.y.n
    }

    /// Interior column range in padded index space.
    #[inline]
    pub fn cols(&self) -> Range<usize> {
        self.nhalo..self.nhalo + self.x.n
    }

    /// Interior range running along `side` (rows for west/east, columns
    /// for south/north).
    pub fn tangential(&self, side: Side) -> Range<usize> {
        if side.is_x_normal() {
            self.rows()
        } else {
            self.cols()
        }
    }

    /// Halo and boundary layers of `side`.
    pub fn ghost_layers(&self, side: Side) -> GhostLayers {
        let h = self.nhalo;
        let n = if side.is_x_normal() { self.x.n } else { self.y.n };
        if side.is_lower() {
            GhostLayers {
                outer: h - 2,
                inner: h - 1,
                first: h,
                second: h + 1,
            }
        } else {
            GhostLayers {
                outer: h + n + 1,
                inner: h + n,
                first: h + n - 1,
                second: h + n - 2,
            }
        }
    }

    /// Index of the boundary face of `side` in its face array (column of
    /// the x-face arrays, row of the y-face arrays).
    pub fn boundary_face(&self, side: Side) -> usize {
        match side {
            Side::West | Side::South => 0,
            Side::East => self.x.n,
            Side::North => self.y.n,
        }
    }

    /// Local extent defined by the boundary vertices.
    pub fn local_extent(&self) -> Extent2D {
        Extent2D::new(self.x.lower, self.x.upper, self.y.lower, self.y.upper)
    }

    /// Extent of the global grid this patch belongs to.
    pub fn global_extent(&self) -> Extent2D {
        Extent2D::new(self.x.glower, self.x.gupper, self.y.glower, self.y.gupper)
    }

    /// Extent defined by the centers of the boundary cells.
    pub fn center_extent(&self) -> Extent2D {
        Extent2D::new(
            self.x.c[0],
            self.x.c[self.x.n - 1],
            self.y.c[0],
            self.y.c[self.y.n - 1],
        )
    }

    /// Global shape `(gny, gnx)`.
    #[inline]
    pub fn global_shape(&self) -> (usize, usize) {
        (self.y.gn, self.x.gn)
    }

    /// Rows and columns of this patch in a global cell-centered array.
    pub fn global_cells(&self) -> (Range<usize>, Range<usize>) {
        (self.y.ibegin..self.y.iend, self.x.ibegin..self.x.iend)
    }

    /// Rows and columns of this patch in a global vertex array.
    pub fn global_vertices(&self) -> (Range<usize>, Range<usize>) {
        (self.y.ibegin..self.y.iend + 1, self.x.ibegin..self.x.iend + 1)
    }

    /// Rows and columns of this patch in a global x-face array.
    pub fn global_x_faces(&self) -> (Range<usize>, Range<usize>) {
        (self.y.ibegin..self.y.iend, self.x.ibegin..self.x.iend + 1)
    }

    /// Rows and columns of this patch in a global y-face array.
    pub fn global_y_faces(&self) -> (Range<usize>, Range<usize>) {
        (self.y.ibegin..self.y.iend + 1, self.x.ibegin..self.x.iend)
    }
}
