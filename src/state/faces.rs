//! Face-centered working arrays.

use ndarray::{Array2, Array3};

use crate::error::StateError;

/// Number of conserved fields: `w`, `hu`, `hv`.
pub const NFIELDS: usize = 3;

/// Quantities on one side of a family of faces.
///
/// All arrays live on the face grid of one axis: `(ny, nx + 1)` for faces
/// normal to x, `(ny + 1, nx)` for faces normal to y.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceOneSide {
    /// Conservative quantities `(w, hu, hv)`.
    pub q: Array3<f64>,
    /// Primitive quantities `(h, u, v)`.
    pub p: Array3<f64>,
    /// One-sided local wave speed.
    pub a: Array2<f64>,
    /// Discontinuous (physical) flux.
    pub f: Array3<f64>,
}

impl FaceOneSide {
    /// Zeroed arrays on a `(rows, cols)` face grid.
    pub fn zeros(shape: (usize, usize)) -> Self {
        let (rows, cols) = shape;
        Self {
            q: Array3::zeros((NFIELDS, rows, cols)),
            p: Array3::zeros((NFIELDS, rows, cols)),
            a: Array2::zeros(shape),
            f: Array3::zeros((NFIELDS, rows, cols)),
        }
    }

    /// Face grid shape `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.a.dim()
    }

    fn validate(&self, shape: (usize, usize), names: [&'static str; 4]) -> Result<(), StateError> {
        let (rows, cols) = shape;
        let fields = [NFIELDS, rows, cols];
        let arrays = [
            (names[0], self.q.shape()),
            (names[1], self.p.shape()),
            (names[3], self.f.shape()),
        ];
        for (name, actual) in arrays {
            if actual != &fields[..] {
                return Err(StateError::shape_mismatch(name, &fields, actual));
            }
        }
        if self.a.dim() != shape {
            return Err(StateError::shape_mismatch(names[2], &[rows, cols], self.a.shape()));
        }
        Ok(())
    }
}

/// Both sides of a family of faces plus their common flux.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceTwoSide {
    /// Values extrapolated from the cell on the lower side of each face.
    pub minus: FaceOneSide,
    /// Values extrapolated from the cell on the upper side of each face.
    pub plus: FaceOneSide,
    /// Central-upwind common flux.
    pub cf: Array3<f64>,
}

impl FaceTwoSide {
    /// Zeroed arrays on a `(rows, cols)` face grid.
    pub fn zeros(shape: (usize, usize)) -> Self {
        let (rows, cols) = shape;
        Self {
            minus: FaceOneSide::zeros(shape),
            plus: FaceOneSide::zeros(shape),
            cf: Array3::zeros((NFIELDS, rows, cols)),
        }
    }

    /// Face grid shape `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.minus.shape()
    }

    /// Check every array against the `(rows, cols)` face grid; `axis` only
    /// labels the error.
    pub fn validate(&self, shape: (usize, usize), axis: char) -> Result<(), StateError> {
        let (minus, plus, cf) = match axis {
            'x' => (
                ["x.minus.q", "x.minus.p", "x.minus.a", "x.minus.f"],
                ["x.plus.q", "x.plus.p", "x.plus.a", "x.plus.f"],
                "x.cf",
            ),
            _ => (
                ["y.minus.q", "y.minus.p", "y.minus.a", "y.minus.f"],
                ["y.plus.q", "y.plus.p", "y.plus.a", "y.plus.f"],
                "y.cf",
            ),
        };
        self.minus.validate(shape, minus)?;
        self.plus.validate(shape, plus)?;
        let (rows, cols) = shape;
        let fields = [NFIELDS, rows, cols];
        if self.cf.shape() != &fields[..] {
            return Err(StateError::shape_mismatch(cf, &fields, self.cf.shape()));
        }
        Ok(())
    }
}

/// Face quantities for both axes.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceQuantities {
    /// Faces normal to x.
    pub x: FaceTwoSide,
    /// Faces normal to y.
    pub y: FaceTwoSide,
}

impl FaceQuantities {
    /// Zeroed arrays for an `nx × ny` interior.
    pub fn zeros(nx: usize, ny: usize) -> Self {
        Self {
            x: FaceTwoSide::zeros((ny, nx + 1)),
            y: FaceTwoSide::zeros((ny + 1, nx)),
        }
    }

    /// Check that the x-face grid has one more column and the y-face grid
    /// one more row than the other.
    pub fn check_consistency(&self) -> Result<(), StateError> {
        let (xr, xc) = self.x.shape();
        let (yr, yc) = self.y.shape();
        if xc != yc + 1 {
            return Err(StateError::InconsistentFaces(
                "x faces must have exactly one more column than y faces",
            ));
        }
        if yr != xr + 1 {
            return Err(StateError::InconsistentFaces(
                "y faces must have exactly one more row than x faces",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shapes() {
        let faces = FaceQuantities::zeros(4, 5);
        assert_eq!(faces.x.minus.q.shape(), &[3, 5, 5]);
        assert_eq!(faces.x.plus.a.dim(), (5, 5));
        assert_eq!(faces.y.cf.shape(), &[3, 6, 4]);
        assert!(faces.check_consistency().is_ok());
        assert!(faces.x.validate((5, 5), 'x').is_ok());
        assert!(faces.y.validate((6, 4), 'y').is_ok());
    }

    #[test]
    fn test_inconsistent_faces() {
        let faces = FaceQuantities {
            x: FaceTwoSide::zeros((5, 5)),
            y: FaceTwoSide::zeros((6, 5)),
        };
        assert!(matches!(
            faces.check_consistency(),
            Err(StateError::InconsistentFaces(_))
        ));
    }

    #[test]
    fn test_side_shape_mismatch() {
        let mut side = FaceTwoSide::zeros((3, 4));
        side.plus.a = Array2::zeros((3, 3));
        assert_eq!(
            side.validate((3, 4), 'x'),
            Err(StateError::shape_mismatch("x.plus.a", &[3, 4], &[3, 3]))
        );
    }
}
