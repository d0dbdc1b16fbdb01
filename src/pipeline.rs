//! Flux driver.
//!
//! Runs the stages in their fixed order, each one reading what the earlier
//! stages wrote:
//!
//! 1. cell-centered primitives (may snap `q` in dry cells)
//! 2. limited slopes
//! 3. face reconstruction
//! 4. local wave speeds
//! 5. physical and central-upwind fluxes
//!
//! The ghost layers of `q` must be filled before the call, for example with
//! [`BoundarySet::apply_to_states`](crate::boundary::BoundarySet::apply_to_states).

use std::fmt;
use std::time::{Duration, Instant};

use log::trace;

use crate::config::KernelConfig;
use crate::error::KernelError;
use crate::flux::{compute_central_fluxes, compute_discontinuous_fluxes, compute_local_speeds};
use crate::grid::Topography;
use crate::reconstruction::{compute_slopes, reconstruct_cell_centers, reconstruct_faces};
use crate::state::States;

/// Wall-clock time spent in each stage of one flux evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageTimings {
    pub cell_centers: Duration,
    pub slopes: Duration,
    pub faces: Duration,
    pub local_speeds: Duration,
    pub fluxes: Duration,
    /// Post-condition scan; zero when the finite check is disabled.
    pub finite_check: Duration,
}

impl StageTimings {
    /// Sum over all stages.
    pub fn total(&self) -> Duration {
        self.cell_centers
            + self.slopes
            + self.faces
            + self.local_speeds
            + self.fluxes
            + self.finite_check
    }

    /// Element-wise sum, for accumulating over many calls.
    pub fn accumulate(&mut self, other: &StageTimings) {
        self.cell_centers += other.cell_centers;
        self.slopes += other.slopes;
        self.faces += other.faces;
        self.local_speeds += other.local_speeds;
        self.fluxes += other.fluxes;
        self.finite_check += other.finite_check;
    }
}

impl fmt::Display for StageTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "centers {:?}, slopes {:?}, faces {:?}, speeds {:?}, fluxes {:?}, check {:?} (total {:?})",
            self.cell_centers,
            self.slopes,
            self.faces,
            self.local_speeds,
            self.fluxes,
            self.finite_check,
            self.total()
        )
    }
}

/// Compute `x.cf` and `y.cf` from the ghost-filled conservative state.
///
/// On return `states.p` holds the cell-centered primitives, `states.q` is
/// dry-snapped and every face array is up to date.
///
/// # Example
///
/// ```
/// use cu_swe::{KernelConfig, compute_fluxes};
/// use cu_swe::boundary::BoundarySet;
/// use cu_swe::grid::{Domain, Topography};
/// use cu_swe::state::States;
/// use cu_swe::types::Extent2D;
///
/// let domain = Domain::new(8, 8, Extent2D::unit_square()).unwrap();
/// let topo = Topography::flat(&domain, 0.0);
/// let mut states = States::new(domain);
/// states.fill_interior([1.0, 0.0, 0.0]);
/// BoundarySet::walls().apply_to_states(&mut states);
///
/// let config = KernelConfig::new(9.81);
/// compute_fluxes(&mut states, &topo, &config).unwrap();
///
/// // lake at rest: only the hydrostatic pressure term is left
/// assert!((states.face.x.cf[[1, 3, 4]] - 0.5 * 9.81).abs() < 1e-12);
/// assert!(states.face.x.cf[[0, 3, 4]].abs() < 1e-12);
/// ```
pub fn compute_fluxes(
    states: &mut States,
    topo: &Topography,
    config: &KernelConfig,
) -> Result<(), KernelError> {
    run(states, topo, config).map(|_| ())
}

/// Same as [`compute_fluxes`], also returning the time spent per stage.
pub fn compute_fluxes_profiled(
    states: &mut States,
    topo: &Topography,
    config: &KernelConfig,
) -> Result<StageTimings, KernelError> {
    let timings = run(states, topo, config)?;
    trace!("flux stages ({}): {}", config.backend, timings);
    Ok(timings)
}

fn run(
    states: &mut States,
    topo: &Topography,
    config: &KernelConfig,
) -> Result<StageTimings, KernelError> {
    config.validate()?;
    states.validate()?;
    topo.validate(&states.domain)?;

    let mut timings = StageTimings::default();
    let States {
        domain,
        q,
        p,
        slpx,
        slpy,
        face,
    } = states;

    let start = Instant::now();
    reconstruct_cell_centers(q, p, &topo.c, config);
    timings.cell_centers = start.elapsed();

    let start = Instant::now();
    compute_slopes(q, slpx, slpy, domain, config);
    timings.slopes = start.elapsed();

    let start = Instant::now();
    reconstruct_faces(q, p, slpx, slpy, face, topo, domain, config);
    timings.faces = start.elapsed();

    let start = Instant::now();
    compute_local_speeds(face, config.gravity, config.backend);
    timings.local_speeds = start.elapsed();

    let start = Instant::now();
    compute_discontinuous_fluxes(face, config.gravity, config.backend);
    compute_central_fluxes(face, config.backend);
    timings.fluxes = start.elapsed();

    if config.finite_check {
        let start = Instant::now();
        states.check_finite()?;
        timings.finite_check = start.elapsed();
    }
    Ok(timings)
}
