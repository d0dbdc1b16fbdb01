//! Kernel configuration.
//!
//! Scalar parameters shared by every stage of the flux computation, built
//! with `with_*` methods and checked once with [`KernelConfig::validate`].
//!
//! # Example
//!
//! ```
//! use cu_swe::{ExecutionBackend, KernelConfig};
//!
//! let config = KernelConfig::new(9.81)
//!     .with_theta(1.0)
//!     .with_drytol(1e-3)
//!     .with_backend(ExecutionBackend::Serial);
//! assert!(config.validate().is_ok());
//! ```

use crate::backend::ExecutionBackend;
use crate::error::ConfigError;

/// Default limiter parameter.
pub const DEFAULT_THETA: f64 = 1.3;
/// Default depth below which a cell carries no flow.
pub const DEFAULT_DRYTOL: f64 = 1e-4;
/// Default near-zero depth floor.
pub const DEFAULT_TOL: f64 = 1e-12;

/// Parameters of the spatial discretization.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KernelConfig {
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Generalized minmod parameter in [1, 2]; 1 is classic minmod.
    pub theta: f64,
    /// Depth below which velocities and momenta are zeroed.
    pub drytol: f64,
    /// Near-zero depth floor; cells below it are snapped to bare topography.
    pub tol: f64,
    /// Apply the positivity fix to reconstructed face depths.
    pub dry_correction: bool,
    /// Scan published arrays for NaN/Inf after each flux computation.
    pub finite_check: bool,
    /// Execution backend for the array kernels.
    pub backend: ExecutionBackend,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::new(9.81)
    }
}

impl KernelConfig {
    /// Create a configuration with default tolerances.
    ///
    /// Defaults: `theta = 1.3`, `drytol = 1e-4`, `tol = 1e-12`, dry
    /// correction and finite check enabled, serial backend.
    pub fn new(gravity: f64) -> Self {
        Self {
            gravity,
            theta: DEFAULT_THETA,
            drytol: DEFAULT_DRYTOL,
            tol: DEFAULT_TOL,
            dry_correction: true,
            finite_check: true,
            backend: ExecutionBackend::Serial,
        }
    }

    /// Set the limiter parameter.
    pub fn with_theta(mut self, theta: f64) -> Self {
        self.theta = theta;
        self
    }

    /// Set the dry tolerance.
    pub fn with_drytol(mut self, drytol: f64) -> Self {
        self.drytol = drytol;
        self
    }

    /// Set the near-zero depth floor.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Enable or disable the face depth positivity fix.
    ///
    /// Only disable it for runs where every depth stays well above `tol`.
    pub fn with_dry_correction(mut self, enabled: bool) -> Self {
        self.dry_correction = enabled;
        self
    }

    /// Enable or disable the post-computation NaN/Inf scan.
    pub fn with_finite_check(mut self, enabled: bool) -> Self {
        self.finite_check = enabled;
        self
    }

    /// Select the execution backend.
    pub fn with_backend(mut self, backend: ExecutionBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Half of gravity, the coefficient of the hydrostatic pressure term.
    #[inline]
    pub fn half_gravity(&self) -> f64 {
        0.5 * self.gravity
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if !(1.0..=2.0).contains(&self.theta) {
            return Err(ConfigError::InvalidTheta(self.theta));
        }
        if !(self.tol.is_finite() && self.tol >= 0.0) {
            return Err(ConfigError::InvalidTolerance(self.tol));
        }
        if !(self.drytol.is_finite() && self.drytol > self.tol) {
            return Err(ConfigError::InvalidDryTolerance {
                drytol: self.drytol,
                tol: self.tol,
            });
        }
        Ok(())
    }
}
