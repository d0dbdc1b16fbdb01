//! Summary quantities of one flux evaluation.
//!
//! Computed after [`compute_fluxes`](crate::compute_fluxes) from the
//! interior primitives and the face wave speeds. The time-step suggestion
//! is what an outer integrator needs to pick a stable step.
//!
//! # Example
//!
//! ```
//! use cu_swe::{KernelConfig, KernelDiagnostics, compute_fluxes};
//! use cu_swe::grid::{Domain, Topography};
//! use cu_swe::state::States;
//! use cu_swe::types::Extent2D;
//!
//! let domain = Domain::new(10, 10, Extent2D::new(0.0, 10.0, 0.0, 10.0)).unwrap();
//! let topo = Topography::flat(&domain, 0.0);
//! let mut states = States::new(domain);
//! states.q.index_axis_mut(ndarray::Axis(0), 0).fill(1.0);
//! let config = KernelConfig::new(9.81);
//! compute_fluxes(&mut states, &topo, &config).unwrap();
//!
//! let diag = KernelDiagnostics::compute(&states, &config);
//! assert!((diag.volume - 100.0).abs() < 1e-9);
//! let dt = diag.cfl_time_step(0.5).unwrap();
//! assert!((dt - 0.5 / 9.81_f64.sqrt()).abs() < 1e-12);
//! ```

use std::fmt;

use ndarray::{ArrayView2, Axis};

use crate::config::KernelConfig;
use crate::flux::boundary_flux_sum;
use crate::grid::GridAxis;
use crate::state::{NFIELDS, States};

/// Diagnostics over the interior of one domain.
#[derive(Clone, Debug, PartialEq)]
pub struct KernelDiagnostics {
    /// Water volume `Σ h·dx·dy`.
    pub volume: f64,
    /// Total x-momentum `Σ hu·dx·dy`.
    pub momentum_x: f64,
    /// Total y-momentum `Σ hv·dx·dy`.
    pub momentum_y: f64,
    /// Smallest cell depth.
    pub min_depth: f64,
    /// Largest cell depth.
    pub max_depth: f64,
    /// Cells with `h < drytol`, the ones whose velocities are zeroed.
    pub dry_cells: usize,
    /// Largest `|a|` over the faces normal to x.
    pub max_speed_x: f64,
    /// Largest `|a|` over the faces normal to y.
    pub max_speed_y: f64,
    /// Net common flux out of the domain per field, integrated along the
    /// boundary (`Σ_east cf·dy − Σ_west cf·dy + Σ_north cf·dx − Σ_south cf·dx`).
    pub net_outflow: [f64; NFIELDS],
    dx: f64,
    dy: f64,
}

fn max_abs(a: ArrayView2<f64>) -> f64 {
    a.fold(0.0_f64, |m, &v| m.max(v.abs()))
}

impl KernelDiagnostics {
    /// Compute diagnostics from the arrays of the last flux evaluation.
    pub fn compute(states: &States, config: &KernelConfig) -> Self {
        let (dy, dx) = states.domain.delta();
        let area = dx * dy;
        let interior = states.p_interior();
        let q = states.q_interior();
        let h = interior.index_axis(Axis(0), 0);

        let volume = h.sum() * area;
        let momentum_x = q.index_axis(Axis(0), 1).sum() * area;
        let momentum_y = q.index_axis(Axis(0), 2).sum() * area;
        let min_depth = h.fold(f64::INFINITY, |m, &v| m.min(v));
        let max_depth = h.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
        let dry_cells = h.iter().filter(|&&v| v < config.drytol).count();

        let face = &states.face;
        let max_speed_x = max_abs(face.x.minus.a.view()).max(max_abs(face.x.plus.a.view()));
        let max_speed_y = max_abs(face.y.minus.a.view()).max(max_abs(face.y.plus.a.view()));

        let fx = boundary_flux_sum(&face.x.cf, GridAxis::X);
        let fy = boundary_flux_sum(&face.y.cf, GridAxis::Y);
        let net_outflow = std::array::from_fn(|k| fx[k] * dy + fy[k] * dx);

        Self {
            volume,
            momentum_x,
            momentum_y,
            min_depth,
            max_depth,
            dry_cells,
            max_speed_x,
            max_speed_y,
            net_outflow,
            dx,
            dy,
        }
    }

    /// Largest stable step `cfl · min(dx / max_speed_x, dy / max_speed_y)`.
    ///
    /// `None` when every face is still (no wave can move).
    pub fn cfl_time_step(&self, cfl: f64) -> Option<f64> {
        let limit = |delta: f64, speed: f64| {
            if speed > 0.0 {
                delta / speed
            } else {
                f64::INFINITY
            }
        };
        let dt = limit(self.dx, self.max_speed_x).min(limit(self.dy, self.max_speed_y));
        dt.is_finite().then_some(cfl * dt)
    }

    /// Whether any interior cell is dry.
    pub fn has_dry_cells(&self) -> bool {
        self.dry_cells > 0
    }
}

impl fmt::Display for KernelDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "volume {:.6e}, depth [{:.4e}, {:.4e}], dry {}, max |a| ({:.4e}, {:.4e})",
            self.volume,
            self.min_depth,
            self.max_depth,
            self.dry_cells,
            self.max_speed_x,
            self.max_speed_y
        )
    }
}
