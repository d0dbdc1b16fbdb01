//! One-dimensional gridlines.
//!
//! A gridline stores the coordinates of one axis of a (possibly partial)
//! structured grid: vertices, cell centers and the positions of the face
//! centers normal to x and to y. For the x axis faces normal to x sit on
//! vertices and faces normal to y sit on cell centers; the y axis is the
//! mirror image.

use std::fmt;

use ndarray::Array1;

use crate::error::GridError;

/// Relative tolerance for coordinate spacing checks.
const SPACING_RTOL: f64 = 1e-10;

/// Axis a gridline belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridAxis {
    X,
    Y,
}

impl GridAxis {
    /// Lowercase axis letter.
    #[inline]
    pub fn letter(self) -> char {
        match self {
            GridAxis::X => 'x',
            GridAxis::Y => 'y',
        }
    }
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Coordinates of one axis of a local grid patch.
#[derive(Clone, Debug, PartialEq)]
pub struct Gridline {
    /// Which axis this gridline describes.
    pub axis: GridAxis,
    /// Number of cells on the global axis.
    pub gn: usize,
    /// Global lower bound.
    pub glower: f64,
    /// Global upper bound.
    pub gupper: f64,
    /// Number of local cells.
    pub n: usize,
    /// Local lower bound.
    pub lower: f64,
    /// Local upper bound.
    pub upper: f64,
    /// First global cell index of this patch.
    pub ibegin: usize,
    /// One past the last global cell index of this patch.
    pub iend: usize,
    /// Cell size.
    pub delta: f64,
    /// Vertex coordinates (n + 1).
    pub v: Array1<f64>,
    /// Cell-center coordinates (n).
    pub c: Array1<f64>,
    /// Coordinates of the centers of faces normal to x.
    pub xf: Array1<f64>,
    /// Coordinates of the centers of faces normal to y.
    pub yf: Array1<f64>,
}

impl Gridline {
    /// Gridline covering a whole axis with `n` cells on `[lower, upper]`.
    ///
    /// # Example
    ///
    /// ```
    /// use cu_swe::grid::{GridAxis, Gridline};
    ///
    /// let x = Gridline::new(GridAxis::X, 4, 0.0, 1.0).unwrap();
    /// assert_eq!(x.delta, 0.25);
    /// assert_eq!(x.c[0], 0.125);
    /// assert_eq!(x.xf.len(), 5);
    /// assert_eq!(x.yf.len(), 4);
    /// ```
    pub fn new(axis: GridAxis, n: usize, lower: f64, upper: f64) -> Result<Self, GridError> {
        Self::partition(axis, n, lower, upper, 0, n)
    }

    /// Gridline for the cells `[ibegin, iend)` of a global axis with `gn`
    /// cells on `[glower, gupper]`.
    pub fn partition(
        axis: GridAxis,
        gn: usize,
        glower: f64,
        gupper: f64,
        ibegin: usize,
        iend: usize,
    ) -> Result<Self, GridError> {
        let letter = axis.letter();
        if gn == 0 {
            return Err(GridError::EmptyAxis { axis: letter });
        }
        if !(glower < gupper) {
            return Err(GridError::InvalidBounds {
                axis: letter,
                lower: glower,
                upper: gupper,
            });
        }
        if ibegin >= iend || iend > gn {
            return Err(GridError::InvalidRange {
                axis: letter,
                begin: ibegin,
                end: iend,
                global: gn,
            });
        }

        let delta = (gupper - glower) / gn as f64;
        let n = iend - ibegin;
        let lower = ibegin as f64 * delta + glower;
        let upper = iend as f64 * delta + glower;

        let v = Array1::linspace(lower, upper, n + 1);
        let c = (&v.slice(ndarray::s![1..]) + &v.slice(ndarray::s![..n])) / 2.0;
        let (xf, yf) = match axis {
            GridAxis::X => (v.clone(), c.clone()),
            GridAxis::Y => (c.clone(), v.clone()),
        };

        let line = Self {
            axis,
            gn,
            glower,
            gupper,
            n,
            lower,
            upper,
            ibegin,
            iend,
            delta,
            v,
            c,
            xf,
            yf,
        };
        line.validate()?;
        Ok(line)
    }

    /// Check every geometric invariant of the gridline.
    pub fn validate(&self) -> Result<(), GridError> {
        let axis = self.axis.letter();
        let tol = SPACING_RTOL
            * self
                .glower
                .abs()
                .max(self.gupper.abs())
                .max(self.delta.abs())
                .max(1.0);

        if self.n == 0 || self.gn == 0 {
            return Err(GridError::EmptyAxis { axis });
        }
        if !(self.glower < self.gupper) {
            return Err(GridError::InvalidBounds {
                axis,
                lower: self.glower,
                upper: self.gupper,
            });
        }
        if !(self.lower < self.upper)
            || self.lower < self.glower - tol
            || self.upper > self.gupper + tol
        {
            return Err(GridError::InvalidBounds {
                axis,
                lower: self.lower,
                upper: self.upper,
            });
        }
        if self.n > self.gn || self.iend <= self.ibegin || self.iend - self.ibegin != self.n {
            return Err(GridError::InvalidRange {
                axis,
                begin: self.ibegin,
                end: self.iend,
                global: self.gn,
            });
        }

        check_len(axis, "vertex", &self.v, self.n + 1)?;
        check_len(axis, "center", &self.c, self.n)?;
        if (self.lower - self.v[0]).abs() > tol || (self.upper - self.v[self.n]).abs() > tol {
            return Err(GridError::InvalidBounds {
                axis,
                lower: self.v[0],
                upper: self.v[self.n],
            });
        }

        for (name, coords) in [
            ("vertex", &self.v),
            ("center", &self.c),
            ("x-face", &self.xf),
            ("y-face", &self.yf),
        ] {
            check_spacing(axis, name, coords, self.delta, tol)?;
        }

        let off_midpoint = self
            .c
            .iter()
            .enumerate()
            .any(|(i, &c)| (c - 0.5 * (self.v[i] + self.v[i + 1])).abs() > tol);
        if off_midpoint {
            return Err(GridError::CentersOffMidpoints { axis });
        }

        let (on_vertices, on_centers) = match self.axis {
            GridAxis::X => (("x-face", &self.xf), ("y-face", &self.yf)),
            GridAxis::Y => (("y-face", &self.yf), ("x-face", &self.xf)),
        };
        if !all_close(on_vertices.1, &self.v, tol) {
            return Err(GridError::FaceMismatch {
                axis,
                coords: on_vertices.0,
            });
        }
        if !all_close(on_centers.1, &self.c, tol) {
            return Err(GridError::FaceMismatch {
                axis,
                coords: on_centers.0,
            });
        }
        Ok(())
    }

    /// Whether this gridline covers the whole global axis.
    pub fn is_global(&self) -> bool {
        self.ibegin == 0 && self.iend == self.gn
    }
}

fn check_len(
    axis: char,
    coords: &'static str,
    values: &Array1<f64>,
    expected: usize,
) -> Result<(), GridError> {
    if values.len() != expected {
        return Err(GridError::LengthMismatch {
            axis,
            coords,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn check_spacing(
    axis: char,
    coords: &'static str,
    values: &Array1<f64>,
    delta: f64,
    tol: f64,
) -> Result<(), GridError> {
    for pair in values.windows(2) {
        let diff = pair[1] - pair[0];
        if !(diff > 0.0) {
            return Err(GridError::NotIncreasing { axis, coords });
        }
        if (diff - delta).abs() > tol {
            return Err(GridError::SpacingMismatch {
                axis,
                coords,
                found: diff,
                delta,
            });
        }
    }
    Ok(())
}

fn all_close(a: &Array1<f64>, b: &Array1<f64>, tol: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tol)
}
