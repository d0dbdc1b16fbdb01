//! Error types.
//!
//! Errors only arise at construction/validation boundaries. The per-cell
//! kernels never fail: degenerate divisions are masked and negative depths
//! are corrected in place.

use thiserror::Error;

/// Errors raised while building or validating gridlines and domains.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// A cell count was zero.
    #[error("axis {axis}: cell count must be positive")]
    EmptyAxis { axis: char },

    /// Lower bound not strictly below upper bound.
    #[error("axis {axis}: lower bound {lower} must be below upper bound {upper}")]
    InvalidBounds { axis: char, lower: f64, upper: f64 },

    /// Local index range does not fit inside the global axis.
    #[error("axis {axis}: local range [{begin}, {end}) does not fit in {global} global cells")]
    InvalidRange {
        axis: char,
        begin: usize,
        end: usize,
        global: usize,
    },

    /// Coordinates are not strictly increasing.
    #[error("axis {axis}: {coords} coordinates are not monotonically increasing")]
    NotIncreasing { axis: char, coords: &'static str },

    /// Spacing between coordinates differs from the cell size.
    #[error("axis {axis}: {coords} spacing {found} does not match delta {delta}")]
    SpacingMismatch {
        axis: char,
        coords: &'static str,
        found: f64,
        delta: f64,
    },

    /// Cell centers are not at vertex midpoints.
    #[error("axis {axis}: cell centers are not at the midpoints of neighbouring vertices")]
    CentersOffMidpoints { axis: char },

    /// Face-center coordinates do not match vertices/centers as the axis requires.
    #[error("axis {axis}: {coords} coordinates do not match the expected face positions")]
    FaceMismatch { axis: char, coords: &'static str },

    /// Coordinate array has the wrong length.
    #[error("axis {axis}: expected {expected} {coords} coordinates, got {actual}")]
    LengthMismatch {
        axis: char,
        coords: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Only a halo width of 2 is supported by the stencils.
    #[error("unsupported halo width {0}, only 2 is supported")]
    UnsupportedHalo(usize),

    /// Gridline attached to the wrong axis.
    #[error("expected a gridline for axis {expected}, got axis {actual}")]
    WrongAxis { expected: char, actual: char },
}

/// Errors raised by configuration validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Gravity must be a positive finite number.
    #[error("gravity must be positive and finite, got {0}")]
    InvalidGravity(f64),

    /// Limiter parameter outside [1, 2].
    #[error("theta must lie in [1, 2], got {0}")]
    InvalidTheta(f64),

    /// Negative numerical tolerance.
    #[error("tol must be non-negative and finite, got {0}")]
    InvalidTolerance(f64),

    /// Dry tolerance not above the numerical tolerance.
    #[error("drytol ({drytol}) must be finite and strictly greater than tol ({tol})")]
    InvalidDryTolerance { drytol: f64, tol: f64 },
}

/// Errors raised while validating state and topography arrays.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Array shape differs from the one the domain requires.
    #[error("shape mismatch for {array}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        array: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// x- and y-face grids are not consistent with each other.
    #[error("inconsistent face grids: {0}")]
    InconsistentFaces(&'static str),

    /// NaN or Inf found in a published array.
    #[error("non-finite value {value} in {array} at index {index:?}")]
    NonFinite {
        array: &'static str,
        index: Vec<usize>,
        value: f64,
    },
}

impl StateError {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(array: &'static str, expected: &[usize], actual: &[usize]) -> Self {
        Self::ShapeMismatch {
            array,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        }
    }
}

/// Umbrella error for the flux driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    State(#[from] StateError),
}
